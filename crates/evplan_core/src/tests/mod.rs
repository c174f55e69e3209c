//! Integration tests for the evplan analysis engine
//!
//! Tests are organized by topic:
//! - `end_to_end` - Full pipeline runs on small hand-checked scenarios
//! - `presets` - Built-in park scenarios and their comparison
//! - `properties` - Property tests for the engine, enumerator and ranking

mod presets;
mod properties;

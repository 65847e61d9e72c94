/// Payload schema validation for every entity
mod validation_tests;

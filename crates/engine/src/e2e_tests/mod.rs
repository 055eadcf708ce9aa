//! End-to-end scenarios exercising the public engine API.

mod forced_composition_tests;

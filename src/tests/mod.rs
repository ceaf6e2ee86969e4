mod registry_tests;
mod store_tests;

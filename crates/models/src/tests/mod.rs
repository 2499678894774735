/// CRUD and relation tests for the entities; require a reachable database.
pub mod crud_tests;

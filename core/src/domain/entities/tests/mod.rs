mod audit_tests;
mod revocation_tests;

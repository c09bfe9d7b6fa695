mod pan_tests;
mod tap_tests;

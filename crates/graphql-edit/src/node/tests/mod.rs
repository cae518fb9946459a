mod type_ref_tests;
mod value_tests;

//! Integration tests for the process-wide default set.
//!
//! Kept to a single test: the default set exits the process on a malformed
//! value, and every test in this binary shares it.

#[test]
fn test_default_set_reads_process_environment() {
    std::env::set_var("ENVSET_IT_STRING", "from env");
    std::env::set_var("ENVSET_IT_INT", "-42");
    std::env::remove_var("ENVSET_IT_MISSING");

    let s = envset::string("ENVSET_IT_STRING", "default", "a string");
    let i = envset::int("ENVSET_IT_INT", 0, "an int");
    let missing = envset::int("ENVSET_IT_MISSING", 7, "never set");

    envset::parse();

    assert_eq!(s.get(), "from env");
    assert_eq!(i.get(), -42);
    assert_eq!(missing.get(), 7);

    let usage = envset::usage();
    assert!(!usage.starts_with("Usage of"));
    assert!(usage.contains("  ENVSET_IT_STRING: default(default)\n    a string\n"));
}

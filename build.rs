fn main() {
    // ESP-IDF link arguments are only needed for the firmware binary; host
    // builds (unit and integration tests) skip them.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}

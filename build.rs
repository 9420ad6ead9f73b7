fn main() {
    // Emit ESP-IDF sysenv so the espidf binary links against the right
    // toolchain. Host-target test builds skip this entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}

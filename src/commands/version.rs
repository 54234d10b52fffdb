/// Version line shared by `--version`
pub fn version_string() -> String {
    format!("Throttler {}", env!("CARGO_PKG_VERSION"))
}

pub fn execute() {
    println!("{}", version_string());
}

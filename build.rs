macro_rules! printinfo {
    ($($tokens: tt)*) => {
        println!("cargo:warning=\r\x1b[36;1m   {}", format!($($tokens)*))
    }
}

fn main() {
    config_native_scs();
}

fn config_native_scs() {
    // SCS_LIB_DIR : directory containing the native library
    // SCS_LIB_NAME : library name without prefix / suffix.
    // The default is the direct linear system solver build.
    println!("cargo:rerun-if-env-changed=SCS_LIB_DIR");
    println!("cargo:rerun-if-env-changed=SCS_LIB_NAME");

    if cfg!(not(feature = "link-scs")) {
        return;
    }

    let name = std::env::var("SCS_LIB_NAME").unwrap_or_else(|_| "scsdir".to_string());

    if let Ok(dir) = std::env::var("SCS_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
        printinfo!("SCS: linking lib{} from {}", name, dir);
    } else {
        printinfo!("SCS: linking lib{} from the system search path", name);
    }
    println!("cargo:rustc-link-lib={}", name);
}

use log::{Level, LevelFilter};

pub fn level_for(debug_mode: bool) -> LevelFilter {
    if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Routes the `log` macros and panics to the browser console.
pub fn init_logger(debug_mode: bool) {
    console_error_panic_hook::set_once();

    let level = level_for(debug_mode).to_level().unwrap_or(Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_debug_mode() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
        assert_eq!(level_for(false).to_level(), Some(Level::Info));
    }
}

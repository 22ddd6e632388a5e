#![no_main]

use bwin_layout::LayoutConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Anything that loads must also validate clean.
    for config in [LayoutConfig::from_toml_str(text), LayoutConfig::from_json_str(text)]
        .into_iter()
        .flatten()
    {
        assert!(config.validate().is_empty(), "{config:?}");
        assert!(config.zone_classifier().is_ok());
    }
});

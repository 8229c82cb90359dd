#![no_main]

use libfuzzer_sys::fuzz_target;
use rookery::Setup;

fuzz_target!(|data: &[u8]| {
    let Ok(setup) = Setup::from_ascii(data) else {
        return;
    };
    let once = setup.to_string();
    let twice = Setup::from_ascii(once.as_bytes())
        .expect("roundtrip")
        .to_string();
    assert_eq!(once, twice);
});

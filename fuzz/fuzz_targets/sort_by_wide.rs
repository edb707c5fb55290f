#![no_main]

use libfuzzer_sys::fuzz_target;

use hybrid_sort_fuzz::u8_as_i32;

fuzz_target!(|data: &[u8]| {
    let mut v = u8_as_i32(data);
    let mut expected = v.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));

    hybrid_sort::sort_by(&mut v, |a, b| b.cmp(a));

    assert_eq!(v, expected);
});

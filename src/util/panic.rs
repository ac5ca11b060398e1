#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

/// Like [`assert_panics`], but also checks that the panic payload is the provided message. Panics
/// raised through `throw` always carry a formatted [`String`].
#[allow(unused_macros)]
macro_rules! assert_panics_with {
    ($run:block, $expected:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied());
                assert_eq!(message, Some($expected), "Panic message didn't match.");
                println!("^ panic caught");
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
#[allow(unused_imports)]
pub(crate) use assert_panics_with;

#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("Expected Ok(_), got Err({:?})", err),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(val) => val,
            Err(err) => panic!(concat!("Expected Ok(_): ", $($arg)+, ": {:?}"), err),
        }
    };
}

/// Asserts the expression is an `Err` whose value matches `$pattern`.
#[macro_export]
macro_rules! assert_err_matches {
    ($expr:expr, $pattern:pat) => {
        match $expr {
            Err($pattern) => {}
            Err(other) => panic!(
                concat!("Expected Err(", stringify!($pattern), "), got Err({:?})"),
                other
            ),
            Ok(_) => panic!(concat!("Expected Err(", stringify!($pattern), "), got Ok(_)")),
        }
    };
}

/// Asserts a lookup found a contact and that it renders as `$expected`.
#[macro_export]
macro_rules! assert_contact {
    ($lookup:expr, $expected:expr) => {
        match $lookup {
            Some(contact) => assert_eq!(contact.to_string(), $expected),
            None => panic!("Expected contact '{}', got None", $expected),
        }
    };
}

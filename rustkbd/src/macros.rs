// Logging front end. Forwards to defmt on the target, to stderr in host
// tests, and to nothing otherwise.

#[cfg(all(not(test), feature = "defmt"))]
mod defmt_log {
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {
            $crate::defmt::debug!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {
            $crate::defmt::info!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {
            $crate::defmt::warn!($($arg,)*)
        };
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),*) => {
            $crate::defmt::error!($($arg,)*)
        };
    }
}

#[cfg(test)]
mod test_log {
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {{
            extern crate std;
            std::eprintln!("DEBUG: {}", std::format!($($arg,)*))
        }};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {{
            extern crate std;
            std::eprintln!("INFO: {}", std::format!($($arg,)*))
        }};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {{
            extern crate std;
            std::eprintln!("WARN: {}", std::format!($($arg,)*))
        }};
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),*) => {{
            extern crate std;
            std::eprintln!("ERROR: {}", std::format!($($arg,)*))
        }};
    }
}

#[allow(unused)]
#[cfg(all(not(test), not(feature = "defmt")))]
mod no_log {
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),*) => {{let _ = ($($arg),*);}};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),*) => {{let _ = ($($arg),*);}};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),*) => {{let _ = ($($arg),*);}};
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),*) => {{let _ = ($($arg),*);}};
    }
}

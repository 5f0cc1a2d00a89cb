#[cfg(feature = "tracing")]
macro_rules! sh_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "sticky_headers_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sh_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sh_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "sticky_headers_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sh_warn {
    ($($tt:tt)*) => {};
}

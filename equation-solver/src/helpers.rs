#[macro_export]
macro_rules! dbg_display {
    ($e: expr) => {{
        let val = $e;
        log::debug!(
            "[{}/{}:{}] {} = {}",
            file!(),
            line!(),
            column!(),
            stringify!($e),
            val
        );
        val
    }};
}

pub fn f64_rounded_string(val: &f64, precision: usize) -> String {
    let rounded = format!("{val:.precision$}");
    if !rounded.contains('.') {
        return rounded;
    }
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

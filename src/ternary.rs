/// My ternary expression handler.  Rust's `if` is already an
/// expression, but `cargo fmt` spreads it across five lines, and the
/// border rules of seam carving (left edge, right edge, top row,
/// bottom row) read far better as a table of one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn picks_the_matching_arm() {
        let x: u32 = 0;
        assert_eq!(cq!(x == 0, 0, x - 1), 0);
        let x: u32 = 4;
        assert_eq!(cq!(x == 0, 0, x - 1), 3);
    }
}

#[cfg(test)]
mod tests {
    use crate::series;
    use std::f64::consts::PI;

    #[test]
    fn test_first_partial_sums_are_exact() {
        assert_eq!(series::approximate(1), 4.0);
        assert_eq!(series::approximate(2), 4.0 * (1.0 - 1.0 / 3.0));
        assert_eq!(series::approximate(3), 4.0 * (1.0 - 1.0 / 3.0 + 1.0 / 5.0));
    }

    #[test]
    fn test_partial_sums_alternate_around_the_limit() {
        for terms in 1..50u32 {
            let approx = series::approximate(terms);
            if terms % 2 == 1 {
                assert!(approx > PI, "odd prefix {terms} should overshoot, got {approx}");
            } else {
                assert!(approx < PI, "even prefix {terms} should undershoot, got {approx}");
            }
        }
    }

    #[test]
    fn test_error_shrinks_with_more_terms() {
        let coarse = (series::approximate(100) - PI).abs();
        let fine = (series::approximate(10_000) - PI).abs();
        assert!(fine < coarse);
    }

    #[test]
    fn test_convergence_at_a_million_terms() {
        let approx = series::approximate(1_000_000);
        assert!((approx - PI).abs() < 1e-5, "got {approx}");
    }

    #[test]
    fn test_result_renders_seventeen_significant_digits() {
        let value = series::approximate(1_000);
        let rendered = series::render_result(value);
        let digits = rendered.chars().filter(|c| c.is_ascii_digit()).count();
        assert_eq!(digits, 17, "got {rendered}");
        // 17 significant digits identify the double uniquely
        assert_eq!(rendered.parse::<f64>().expect("rendered decimal parses"), value);
    }

    #[test]
    fn test_render_scales_decimals_to_magnitude() {
        assert_eq!(series::render_result(4.0), "4.0000000000000000");
        assert_eq!(series::render_result(0.25), "0.25000000000000000");
    }
}

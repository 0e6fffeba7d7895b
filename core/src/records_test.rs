#[cfg(test)]
mod tests {
    use crate::records::{self, Person, ROSTER_SIZE};

    #[test]
    fn test_roster_seed_values() {
        let roster = records::build_roster(5);
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0], Person::new(1, 99, 79_999.0));
        assert_eq!(roster[4], Person::new(5, 95, 79_995.0));
    }

    #[test]
    fn test_seed_ages_go_negative_past_one_hundred() {
        let roster = records::build_roster(200);
        assert_eq!(roster[149].age(), -50);
    }

    #[test]
    fn test_age_steps_up_to_one_hundred() {
        let mut person = Person::new(7, 93, 0.0);
        person.age_to_hundred();
        assert_eq!(person.age(), 100);
    }

    #[test]
    fn test_age_already_past_one_hundred_is_untouched() {
        let mut person = Person::new(1, 130, 0.0);
        person.age_to_hundred();
        assert_eq!(person.age(), 130);
    }

    #[test]
    fn test_weight_gain_adds_exactly() {
        let mut person = Person::new(42, 100, 79_958.0);
        person.gain_weight(42.0);
        assert_eq!(person.weight(), 80_000.0);
    }

    #[test]
    fn test_transform_restores_every_record() {
        let mut roster = records::build_roster(ROSTER_SIZE);
        records::transform(&mut roster);
        for person in &roster {
            assert!(person.age() >= 100, "record {} kept age {}", person.id(), person.age());
            assert_eq!(
                person.weight(),
                80_000.0,
                "record {} drifted to {}",
                person.id(),
                person.weight()
            );
        }
    }

    #[test]
    fn test_render_format() {
        let mut person = Person::new(3, 97, 79_997.0);
        let gain = f64::from(person.id());
        person.age_to_hundred().gain_weight(gain);
        let mut line = String::new();
        person.render(&mut line);
        assert_eq!(line, "Person 3 - Age: 100, Weight: 80000");
    }

    #[test]
    fn test_render_keeps_fractional_weights() {
        let mut line = String::new();
        Person::new(1, 100, 80_000.5).render(&mut line);
        assert_eq!(line, "Person 1 - Age: 100, Weight: 80000.5");
    }

    #[test]
    fn test_output_preserves_construction_order() {
        let mut roster = records::build_roster(ROSTER_SIZE);
        records::transform(&mut roster);
        let mut sink = Vec::new();
        records::write_roster(&roster, &mut sink).expect("in-memory sink never fails");
        let text = String::from_utf8(sink).expect("output is ASCII");
        assert_eq!(text.lines().count(), ROSTER_SIZE as usize);
        for (idx, line) in text.lines().enumerate() {
            let rest = line.strip_prefix("Person ").expect("line prefix");
            let id: u32 = rest.split(' ').next().unwrap().parse().unwrap();
            assert_eq!(id as usize, idx + 1, "line {idx} out of order");
        }
    }

    #[test]
    fn test_run_streams_full_roster() {
        let mut sink = Vec::new();
        records::run(&mut sink).expect("in-memory sink never fails");
        let text = String::from_utf8(sink).expect("output is ASCII");
        assert_eq!(text.lines().count(), ROSTER_SIZE as usize);
        assert!(text.starts_with("Person 1 - Age: 100, Weight: 80000\n"));
        assert_eq!(
            text.lines().last(),
            Some("Person 10000 - Age: 100, Weight: 80000")
        );
    }
}

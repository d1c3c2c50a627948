//! Property-based tests for userguard-validator.

use proptest::prelude::*;
use userguard_validator::prelude::*;

fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        prop::sample::select(ProfileKind::ALL.to_vec()),
        "[a-z]{0,12}",
        "[a-z@.]{0,16}",
        "[a-zA-Z0-9$_]{0,14}",
        0u32..100,
    )
        .prop_map(|(kind, username, email, password, age)| {
            Profile::new(kind, username, email, password, age)
        })
}

fn library() -> Vec<Rule<Profile>> {
    vec![
        email_ends_with_il().into_rule(),
        email_length_bigger_than_10().into_rule(),
        password_length_bigger_than_8().into_rule(),
        password_includes_letters_numbers_only().into_rule(),
        password_includes_dollar_sign().into_rule(),
        password_is_different_from_username().into_rule(),
        age_bigger_than_18().into_rule(),
        username_length_bigger_than_8().into_rule(),
    ]
}

fn pair() -> impl Strategy<Value = (Rule<Profile>, Rule<Profile>)> {
    let n = library().len();
    (0..n, 0..n).prop_map(|(a, b)| {
        let rules = library();
        (rules[a].clone(), rules[b].clone())
    })
}

// ============================================================================
// IDEMPOTENCY: evaluate(x) == evaluate(x)
// ============================================================================

proptest! {
    #[test]
    fn composed_rule_is_idempotent(profile in arb_profile()) {
        let rule = compose![
            email_ends_with_il().or(email_length_bigger_than_10()),
            password_includes_dollar_sign().xor(password_includes_letters_numbers_only()),
            none_of![age_bigger_than_18(), username_length_bigger_than_8()],
        ];
        prop_assert_eq!(evaluate(&rule, &profile), evaluate(&rule, &profile));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_is_left_result_on_left_failure((a, b) in pair(), profile in arb_profile()) {
        let left = evaluate(&a, &profile);
        let combined = evaluate(&a.clone().and(b.clone()), &profile);
        if left.is_invalid() {
            prop_assert_eq!(combined, left);
        } else {
            prop_assert_eq!(combined, evaluate(&b, &profile));
        }
    }

    #[test]
    fn or_passes_iff_either_passes((a, b) in pair(), profile in arb_profile()) {
        let l = evaluate(&a, &profile);
        let r = evaluate(&b, &profile);
        let combined = evaluate(&a.clone().or(b.clone()), &profile);

        prop_assert_eq!(combined.is_valid(), l.is_valid() || r.is_valid());
        if combined.is_invalid() {
            let expected = format!("{} or {}", l.reason().unwrap(), r.reason().unwrap());
            prop_assert_eq!(combined.reason(), Some(expected.as_str()));
        }
    }

    #[test]
    fn xor_passes_iff_exactly_one_passes((a, b) in pair(), profile in arb_profile()) {
        let l = evaluate(&a, &profile).is_valid();
        let r = evaluate(&b, &profile).is_valid();
        let combined = evaluate(&a.clone().xor(b.clone()), &profile);

        prop_assert_eq!(combined.is_valid(), l != r);
        if l == r {
            let expected = format!("XOR failed: both validations were {l}");
            prop_assert_eq!(combined.reason(), Some(expected.as_str()));
        }
    }

    #[test]
    fn all_is_first_failure_in_order(
        picks in prop::collection::vec(0usize..8, 0..6),
        profile in arb_profile(),
    ) {
        let rules: Vec<Rule<Profile>> = picks.iter().map(|&i| library()[i].clone()).collect();
        let expected = rules
            .iter()
            .map(|rule| evaluate(rule, &profile))
            .find(ValidationResult::is_invalid)
            .unwrap_or(ValidationResult::Valid);

        prop_assert_eq!(evaluate(&all(rules), &profile), expected);
    }

    #[test]
    fn none_is_valid_iff_no_rule_passes(
        picks in prop::collection::vec(0usize..8, 0..6),
        profile in arb_profile(),
    ) {
        let rules: Vec<Rule<Profile>> = picks.iter().map(|&i| library()[i].clone()).collect();
        let any_passed = rules.iter().any(|rule| evaluate(rule, &profile).is_valid());

        prop_assert_eq!(evaluate(&none(rules), &profile).is_valid(), !any_passed);
    }
}

// ============================================================================
// RESULT INVARIANT: valid never has a reason, invalid always has one
// ============================================================================

proptest! {
    #[test]
    fn reason_present_iff_invalid((a, b) in pair(), profile in arb_profile()) {
        for result in [
            evaluate(&a, &profile),
            evaluate(&a.clone().and(b.clone()), &profile),
            evaluate(&a.clone().or(b.clone()), &profile),
            evaluate(&a.clone().xor(b.clone()), &profile),
        ] {
            prop_assert_eq!(result.reason().is_some(), result.is_invalid());
            if let Some(reason) = result.reason() {
                prop_assert!(!reason.is_empty());
            }
        }
    }
}

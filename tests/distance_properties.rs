use proptest::prelude::*;
use seqsim::engines::{banded, dense, substring};
use seqsim::{BoundedDistance, Sequence};

proptest! {
    #[test]
    fn triangle_inequality(
        a in "[abc]{0,10}",
        b in "[abc]{0,10}",
        c in "[abc]{0,10}",
    ) {
        let (a, b, c) = (
            Sequence::from(a.as_str()),
            Sequence::from(b.as_str()),
            Sequence::from(c.as_str()),
        );
        let ab = dense::edit_distance(&a, &b);
        let bc = dense::edit_distance(&b, &c);
        let ac = dense::edit_distance(&a, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={ac} > d(a,b)+d(b,c)={}", ab + bc);
    }

    #[test]
    fn distance_is_symmetric_and_bounded(a in "[ab]{0,12}", b in "[ab]{0,12}") {
        let (a, b) = (Sequence::from(a.as_str()), Sequence::from(b.as_str()));
        let d = dense::edit_distance(&a, &b);
        prop_assert_eq!(d, dense::edit_distance(&b, &a));
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn banded_agrees_with_exact_for_every_bound(
        a in "[acgt]{0,10}",
        b in "[acgt]{0,10}",
        k in 0usize..12,
    ) {
        let (a, b) = (Sequence::from(a.as_str()), Sequence::from(b.as_str()));
        let exact = dense::edit_distance(&a, &b);
        let bounded = banded::edit_distance_bounded(&a, &b, k);
        if k >= exact {
            prop_assert_eq!(bounded, BoundedDistance::Within(exact));
        } else {
            prop_assert_eq!(bounded, BoundedDistance::Exceeds);
        }
    }

    #[test]
    fn substring_never_exceeds_subsequence(a in "[AB]{0,12}", b in "[AB]{0,12}") {
        let (a, b) = (Sequence::from(a.as_str()), Sequence::from(b.as_str()));
        prop_assert!(substring::longest_match_len(&a, &b) <= dense::lcs_len(&a, &b));
    }

    #[test]
    fn substring_variants_agree_exactly(a in "[xyz]{0,12}", b in "[xyz]{0,12}") {
        let (a, b) = (Sequence::from(a.as_str()), Sequence::from(b.as_str()));
        prop_assert_eq!(
            substring::longest_match(&a, &b),
            substring::longest_match_diag(&a, &b)
        );
    }

    #[test]
    fn substring_location_is_a_real_occurrence(a in "[pq]{0,12}", b in "[pq]{0,12}") {
        let (a, b) = (Sequence::from(a.as_str()), Sequence::from(b.as_str()));
        if let Some(iv) = substring::longest_match(&a, &b) {
            prop_assert_eq!(
                &a.codes()[iv.start_a..iv.start_a + iv.len],
                &b.codes()[iv.start_b..iv.start_b + iv.len]
            );
        } else {
            prop_assert!(!a.codes().iter().any(|c| b.codes().contains(c)));
        }
    }
}

#[cfg(feature = "heavy")]
#[test]
fn heavy_banded_rejection_on_long_drifting_inputs() {
    fn wave(len: usize, phase: usize) -> String {
        (0..len)
            .map(|i| match (i + phase) / 97 % 4 {
                0 => 'a',
                1 => 'c',
                2 => 'g',
                _ => 't',
            })
            .collect()
    }
    let a = Sequence::from(wave(30_000, 0).as_str());
    let b = Sequence::from(wave(30_000, 3).as_str());
    let exact = dense::edit_distance(&a, &b);
    assert_eq!(
        banded::edit_distance_bounded(&a, &b, exact),
        BoundedDistance::Within(exact)
    );
    if exact > 0 {
        assert_eq!(
            banded::edit_distance_bounded(&a, &b, exact - 1),
            BoundedDistance::Exceeds
        );
    }
}

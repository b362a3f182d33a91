use chrono::{DateTime, Utc};
use chrono_tz::UTC;
use proptest::prelude::*;
use strom_core::{Point, RawBatch, assemble};
use strom_types::{Resolution, StromError};

const BASE: i64 = 1_695_000_000 - (1_695_000_000 % 3600);

fn grid(k: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(BASE + k * 3600, 0).unwrap()
}

fn full_batch(len: i64, offset: f64) -> RawBatch {
    RawBatch::new(
        (0..len)
            .map(|k| Point {
                ts: grid(k),
                value: offset + k as f64,
            })
            .collect(),
    )
}

proptest! {
    #[test]
    fn split_point_never_changes_the_result(len in 2i64..48, split in 1usize..47) {
        let whole = full_batch(len, 0.0);
        let split = split.min(whole.points.len() - 1);
        let (a, b) = whole.points.split_at(split);
        let merged = assemble(
            "prop",
            [RawBatch::new(a.to_vec()), RawBatch::new(b.to_vec())],
            grid(0),
            grid(len),
            Resolution::Hour,
            UTC,
        )
        .unwrap();
        let direct = assemble("prop", [whole.clone()], grid(0), grid(len), Resolution::Hour, UTC)
            .unwrap();
        prop_assert_eq!(merged, direct);
    }

    #[test]
    fn overlapping_tail_resolves_to_the_later_batch(len in 3i64..48, overlap in 1i64..47) {
        let overlap = overlap.min(len - 1);
        let first = full_batch(len, 0.0);
        // The second batch restates the last `overlap` instants with shifted values.
        let second = RawBatch::new(
            (len - overlap..len)
                .map(|k| Point { ts: grid(k), value: 1000.0 + k as f64 })
                .collect(),
        );
        let merged = assemble(
            "prop",
            [first, second],
            grid(0),
            grid(len),
            Resolution::Hour,
            UTC,
        )
        .unwrap();
        for (k, v) in merged.values().enumerate() {
            let k = k as i64;
            let expected = if k < len - overlap { k as f64 } else { 1000.0 + k as f64 };
            prop_assert_eq!(v, expected);
        }
    }

    #[test]
    fn dropping_any_single_record_fails_assembly(len in 2i64..48, victim in 0usize..47) {
        let mut points = full_batch(len, 0.0).points;
        let victim = victim.min(points.len() - 1);
        points.remove(victim);
        let res = assemble(
            "prop",
            [RawBatch::new(points)],
            grid(0),
            grid(len),
            Resolution::Hour,
            UTC,
        );
        let incomplete_with_one_missing =
            matches!(res, Err(StromError::IncompleteSeries { missing: 1, .. }));
        prop_assert!(incomplete_with_one_missing);
    }
}

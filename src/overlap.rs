use std::borrow::Cow;

use crate::duration::Duration;

impl Duration {
    /// The part of time covered by both `self` and `other`.
    ///
    /// ```text
    ///   disjoint    self inside    other inside   self ends      self starts
    ///               other          self           inside other   inside other
    ///  |--|          |    |        |--------|     |-----|           |-----|
    ///       |--|    |------|         |    |          |-----|     |-----|
    /// ```
    ///
    /// If one span lies within the other, the inner span itself is returned
    /// (borrowed). Spans that do not intersect, or only touch at a boundary, give
    /// a zero-length span anchored at the epoch.
    pub fn overlap<'a>(&'a self, other: &'a Duration) -> Cow<'a, Duration> {
        let (lower, higher) = (self.date_lower(), self.date_higher());
        let (other_lower, other_higher) = (other.date_lower(), other.date_higher());

        if (higher <= other_lower && lower <= other_lower)
            || (lower >= other_higher && higher >= other_higher)
        {
            Cow::Owned(Duration::from_millis(0))
        } else if lower >= other_lower && higher <= other_higher {
            Cow::Borrowed(self)
        } else if lower <= other_lower && higher >= other_higher {
            Cow::Borrowed(other)
        } else if higher >= other_lower && higher <= other_higher {
            Cow::Owned(Duration::new(other_lower, higher))
        } else if lower >= other_lower && lower <= other_higher {
            Cow::Owned(Duration::new(other_higher, lower))
        } else {
            // Every ordering of two well-formed spans is covered above.
            Cow::Owned(Duration::from_millis(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::Instant;

    fn span(lower: i64, higher: i64) -> Duration {
        Duration::new(
            Instant::from_millis_since_epoch(lower),
            Instant::from_millis_since_epoch(higher),
        )
    }

    #[test]
    fn disjoint_spans() {
        let a = span(0, 100);
        let b = span(200, 300);
        assert_eq!(a.overlap(&b).milliseconds(), 0);
        assert_eq!(b.overlap(&a).milliseconds(), 0);
        assert_eq!(*a.overlap(&b), Duration::from_millis(0));
    }

    #[test]
    fn touching_spans_do_not_overlap() {
        let a = span(0, 100);
        let b = span(100, 300);
        assert_eq!(a.overlap(&b).milliseconds(), 0);
        assert_eq!(b.overlap(&a).milliseconds(), 0);
    }

    #[test]
    fn inner_span_is_returned_as_is() {
        let outer = span(0, 1_000);
        let inner = span(200, 300);

        let overlap = inner.overlap(&outer);
        assert!(matches!(overlap, Cow::Borrowed(_)));
        assert!(std::ptr::eq(overlap.as_ref(), &inner));

        let overlap = outer.overlap(&inner);
        assert!(matches!(overlap, Cow::Borrowed(_)));
        assert!(std::ptr::eq(overlap.as_ref(), &inner));
    }

    #[test]
    fn identical_spans() {
        let a = span(10, 20);
        let b = span(10, 20);
        assert!(std::ptr::eq(a.overlap(&b).as_ref(), &a));
    }

    #[test]
    fn self_ends_inside_other() {
        let a = span(0, 500);
        let b = span(300, 1_000);
        let overlap = a.overlap(&b);
        assert_eq!(overlap.date_lower(), Instant::from_millis_since_epoch(300));
        assert_eq!(overlap.date_higher(), Instant::from_millis_since_epoch(500));
        assert_eq!(overlap.milliseconds(), 200);
    }

    #[test]
    fn self_starts_inside_other() {
        let a = span(300, 1_000);
        let b = span(0, 500);
        let overlap = a.overlap(&b);
        assert_eq!(overlap.date_lower(), Instant::from_millis_since_epoch(300));
        assert_eq!(overlap.date_higher(), Instant::from_millis_since_epoch(500));
        assert_eq!(overlap.milliseconds(), 200);
    }

    #[test]
    fn overlap_is_symmetric_in_length() {
        let spans = [
            span(0, 10),
            span(5, 15),
            span(-20, 3),
            span(10, 10),
            span(-100, 100),
        ];
        for a in &spans {
            for b in &spans {
                assert_eq!(
                    a.overlap(b).milliseconds(),
                    b.overlap(a).milliseconds(),
                    "{:?} / {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn calendar_spans() {
        let year_2021 = Duration::new(
            Instant::from_ymd(2021, 1, 1).unwrap(),
            Instant::from_ymd(2022, 1, 1).unwrap(),
        );
        let winter = Duration::new(
            Instant::from_ymd(2021, 12, 1).unwrap(),
            Instant::from_ymd(2022, 3, 1).unwrap(),
        );
        let overlap = year_2021.overlap(&winter);
        assert_eq!(overlap.days(), 31.0);
        assert_eq!(overlap.to_string(), "0y 1m 1d 0h 0min 0s 0ms");
    }
}

//! Sorting profiles with an injected comparator
//!
//! The ordering policy is always supplied by the caller; this module only
//! fixes the algorithm (a stable sort).

use std::cmp::Ordering;

use crate::profile::Profile;

/// Sorts profiles in place using `compare`.
///
/// The sort is stable: profiles that compare equal keep their relative order.
pub fn sort_by<F>(profiles: &mut [Profile], compare: F)
where
    F: FnMut(&Profile, &Profile) -> Ordering,
{
    profiles.sort_by(compare);
}

/// Sorts an owned list of profiles and returns it.
#[must_use]
pub fn sorted_by<F>(mut profiles: Vec<Profile>, compare: F) -> Vec<Profile>
where
    F: FnMut(&Profile, &Profile) -> Ordering,
{
    sort_by(&mut profiles, compare);
    profiles
}

/// Stock comparators for [`sort_by`] and [`sorted_by`].
pub mod compare {
    use std::cmp::Ordering;

    use crate::profile::Profile;

    /// Orders by username, lexicographically.
    pub fn by_username(a: &Profile, b: &Profile) -> Ordering {
        a.username().cmp(b.username())
    }

    /// Orders by email, lexicographically.
    pub fn by_email(a: &Profile, b: &Profile) -> Ordering {
        a.email().cmp(b.email())
    }

    /// Orders by age, youngest first.
    pub fn by_age(a: &Profile, b: &Profile) -> Ordering {
        a.age().cmp(&b.age())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ProfileKind;

    fn profile(username: &str, age: u32) -> Profile {
        Profile::new(ProfileKind::Basic, username, format!("{username}@site.il"), "pw", age)
    }

    #[test]
    fn test_sort_by_age() {
        let mut profiles = vec![profile("carol", 41), profile("alice", 30), profile("bob", 19)];
        sort_by(&mut profiles, compare::by_age);
        let ages: Vec<u32> = profiles.iter().map(Profile::age).collect();
        assert_eq!(ages, [19, 30, 41]);
    }

    #[test]
    fn test_sorted_by_reversed() {
        let profiles = vec![profile("alice", 30), profile("carol", 41), profile("bob", 19)];
        let sorted = sorted_by(profiles, |a, b| compare::by_username(b, a));
        let names: Vec<&str> = sorted.iter().map(Profile::username).collect();
        assert_eq!(names, ["carol", "bob", "alice"]);
    }

    #[test]
    fn test_sort_empty() {
        let mut profiles: Vec<Profile> = Vec::new();
        sort_by(&mut profiles, compare::by_email);
        assert!(profiles.is_empty());
    }
}

use chrono::NaiveDate;

/// National ID number, analogous to a tax identification number.
/// Unique across the registry.
pub type NationalId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub national_id: NationalId,
    pub birth_date: NaiveDate,
    /// Street, district and city joined into a single line.
    pub address: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        national_id: NationalId,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            national_id,
            birth_date,
            address: address.into(),
        }
    }
}

/// Find the position of the first user with the given national ID.
/// Linear scan; the registry is small and append-only.
pub fn find_user_index(users: &[User], national_id: NationalId) -> Option<usize> {
    users.iter().position(|u| u.national_id == national_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(national_id: NationalId) -> User {
        User::new(
            "Maria Silva",
            national_id,
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "Rua das Flores 10, Centro, Salvador/BA",
        )
    }

    #[test]
    fn test_find_user_index_empty() {
        assert_eq!(find_user_index(&[], 12345678900), None);
    }

    #[test]
    fn test_find_user_index_hit_and_miss() {
        let users = vec![sample_user(111), sample_user(222), sample_user(333)];

        assert_eq!(find_user_index(&users, 111), Some(0));
        assert_eq!(find_user_index(&users, 333), Some(2));
        assert_eq!(find_user_index(&users, 999), None);
    }

    #[test]
    fn test_find_user_index_returns_first_match() {
        // Uniqueness is enforced at registration; the scan itself just
        // returns the first hit.
        let users = vec![sample_user(111), sample_user(111)];
        assert_eq!(find_user_index(&users, 111), Some(0));
    }
}

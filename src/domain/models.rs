use serde::{Deserialize, Serialize};

/// Identifies one input of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Phone,
    Residence,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::FirstName,
        Field::LastName,
        Field::Phone,
        Field::Residence,
    ];

    /// Stable id, matching the serialized key of the field.
    pub fn id(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Phone => "phone",
            Field::Residence => "residence",
        }
    }

    pub fn from_id(id: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Phone => "Phone Number",
            Field::Residence => "Residence",
        }
    }

    /// Secret fields are masked wherever their value is displayed.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// The three screens of the signup wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Account,
    Personal,
    Review,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Account, Step::Personal, Step::Review];

    pub fn index(self) -> usize {
        match self {
            Step::Account => 0,
            Step::Personal => 1,
            Step::Review => 2,
        }
    }

    /// Clamps out-of-range indices to the last step.
    pub fn from_index(index: usize) -> Step {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Account => "Account Details",
            Step::Personal => "Personal Info",
            Step::Review => "Review and Submit",
        }
    }

    /// Inputs owned by this step. The review step owns none.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Account => &[Field::Email, Field::Password, Field::ConfirmPassword],
            Step::Personal => &[Field::FirstName, Field::LastName, Field::Phone, Field::Residence],
            Step::Review => &[],
        }
    }

    pub fn is_last(self) -> bool {
        self == Step::Review
    }

    pub fn next(self) -> Step {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Step {
        Self::from_index(self.index().saturating_sub(1))
    }
}

/// Values of every signup input. All fields start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub residence: String,
}

impl SignupForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Residence => &self.residence,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.slot(field) = value;
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Residence => &mut self.residence,
        }
    }
}

/// One row of the remote passenger listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub trips: u64,
}

/// A successfully fetched page: rows in server order plus the total
/// number of passengers across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerPage {
    pub items: Vec<Passenger>,
    pub total_count: u64,
}

/// A read request for one page, tagged with the sequence number it was
/// issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub page: usize,
    pub rows_per_page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_id(field.id()), Some(field));
        }
        assert_eq!(Field::from_id("confirm-password"), None);
    }

    #[test]
    fn test_set_changes_only_one_field() {
        let mut form = SignupForm::default();
        form.set(Field::LastName, "Lovelace".to_string());

        assert_eq!(form.get(Field::LastName), "Lovelace");
        for field in Field::ALL.into_iter().filter(|f| *f != Field::LastName) {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_step_navigation_is_clamped() {
        assert_eq!(Step::Account.previous(), Step::Account);
        assert_eq!(Step::Account.next(), Step::Personal);
        assert_eq!(Step::Review.next(), Step::Review);
        assert_eq!(Step::from_index(7), Step::Review);
    }

    #[test]
    fn test_every_field_belongs_to_exactly_one_step() {
        for field in Field::ALL {
            let owners = Step::ALL.iter().filter(|s| s.fields().contains(&field)).count();
            assert_eq!(owners, 1, "{:?}", field);
        }
    }

    #[test]
    fn test_form_serializes_with_camel_case_keys() {
        let form = SignupForm {
            confirm_password: "secret123".to_string(),
            first_name: "Ada".to_string(),
            ..SignupForm::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["confirmPassword"], "secret123");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_passenger_reads_underscore_id() {
        let passenger: Passenger =
            serde_json::from_str(r#"{"_id":"abc","name":"Jane","trips":12,"__v":0}"#).unwrap();
        assert_eq!(passenger.id, "abc");
        assert_eq!(passenger.trips, 12);
    }
}

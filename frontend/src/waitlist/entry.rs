use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Doctor,
    Dentist,
    Therapist,
    ClinicManager,
    HospitalAdmin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Doctor,
        Role::Dentist,
        Role::Therapist,
        Role::ClinicManager,
        Role::HospitalAdmin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Dentist => "Dentist",
            Role::Therapist => "Therapist",
            Role::ClinicManager => "Clinic Manager",
            Role::HospitalAdmin => "Hospital Admin",
        }
    }

    /// The `<select>` placeholder has an empty value, which maps to `None`.
    pub fn from_label(label: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Role,
    Organization,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Email,
    Role,
}

/// What the visitor has typed so far. Replaced wholesale on every keystroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistEntry {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub organization: String,
}

/// Wire body for the form-intake endpoint.
#[derive(Serialize, Debug, PartialEq)]
pub struct WaitlistPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub role: &'static str,
    pub clinic: &'a str,
}

impl WaitlistEntry {
    pub fn with_field(&self, field: Field, value: String) -> WaitlistEntry {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Role => next.role = Role::from_label(&value),
            Field::Organization => next.organization = value,
        }
        next
    }

    /// Same rule the browser enforces through `required`: name, email and
    /// role must be filled in, organization may be blank.
    pub fn payload(&self) -> Result<WaitlistPayload<'_>, MissingField> {
        if self.name.is_empty() {
            return Err(MissingField::Name);
        }
        if self.email.is_empty() {
            return Err(MissingField::Email);
        }
        let role = self.role.ok_or(MissingField::Role)?;

        Ok(WaitlistPayload {
            name: &self.name,
            email: &self.email,
            role: role.label(),
            clinic: &self.organization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> WaitlistEntry {
        WaitlistEntry::default()
            .with_field(Field::Name, "Jane Doe".to_string())
            .with_field(Field::Email, "jane@clinic.org".to_string())
            .with_field(Field::Role, "Dentist".to_string())
            .with_field(Field::Organization, "Acme Dental".to_string())
    }

    #[test]
    fn with_field_leaves_original_untouched() {
        let empty = WaitlistEntry::default();
        let named = empty.with_field(Field::Name, "Jane".to_string());

        assert_eq!(empty.name, "");
        assert_eq!(named.name, "Jane");
    }

    #[test]
    fn payload_uses_clinic_key_and_role_label() {
        let entry = jane();
        let body = serde_json::to_value(entry.payload().unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Jane Doe",
                "email": "jane@clinic.org",
                "role": "Dentist",
                "clinic": "Acme Dental"
            })
        );
    }

    #[test]
    fn organization_is_optional() {
        let entry = jane().with_field(Field::Organization, String::new());
        assert_eq!(entry.payload().unwrap().clinic, "");
    }

    #[test]
    fn unselected_role_blocks_payload() {
        let entry = jane().with_field(Field::Role, String::new());
        assert_eq!(entry.role, None);
        assert_eq!(entry.payload(), Err(MissingField::Role));
    }

    #[test]
    fn empty_name_or_email_blocks_payload() {
        assert_eq!(
            jane().with_field(Field::Name, String::new()).payload(),
            Err(MissingField::Name)
        );
        assert_eq!(
            jane().with_field(Field::Email, String::new()).payload(),
            Err(MissingField::Email)
        );
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        // `required` only rejects the empty string.
        let entry = jane().with_field(Field::Name, "   ".to_string());
        assert_eq!(entry.payload().unwrap().name, "   ");
    }

    #[test]
    fn unknown_role_label_is_unselected() {
        assert_eq!(Role::from_label("Surgeon"), None);
        for role in Role::ALL {
            assert_eq!(Role::from_label(role.label()), Some(role));
        }
    }
}

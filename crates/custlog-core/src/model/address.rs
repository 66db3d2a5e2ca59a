use serde_json::{Map, Value};

/// Constituent parts of a customer address, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressPart {
    Street,
    Subdistrict,
    District,
    Province,
    PostalCode,
}

impl AddressPart {
    pub const ALL: [AddressPart; 5] = [
        AddressPart::Street,
        AddressPart::Subdistrict,
        AddressPart::District,
        AddressPart::Province,
        AddressPart::PostalCode,
    ];

    /// Accepted payload keys, canonical first
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            AddressPart::Street => &["street", "address"],
            AddressPart::Subdistrict => &["subdistrict", "sub_district"],
            AddressPart::District => &["district"],
            AddressPart::Province => &["province"],
            AddressPart::PostalCode => &["postalCode", "postal_code", "zipcode"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressPart::Street => "ที่อยู่",
            AddressPart::Subdistrict => "ตำบล",
            AddressPart::District => "อำเภอ",
            AddressPart::Province => "จังหวัด",
            AddressPart::PostalCode => "รหัสไปรษณีย์",
        }
    }
}

/// Borrowed view of an address sub-object
#[derive(Debug, Clone, Copy)]
pub struct Address<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Address<'a> {
    /// View a raw value as an address; `None` when it is not an object
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// Value of one part, ignoring nulls
    pub fn part(&self, part: AddressPart) -> Option<&'a Value> {
        part.keys()
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|v| !v.is_null())
    }

    /// Shape test used for fields that are not registered by name
    pub fn looks_like_address(value: &Value) -> bool {
        let Some(fields) = value.as_object() else {
            return false;
        };
        [
            AddressPart::Subdistrict,
            AddressPart::District,
            AddressPart::Province,
            AddressPart::PostalCode,
        ]
        .iter()
        .flat_map(|p| p.keys())
        .any(|key| fields.contains_key(*key))
    }
}

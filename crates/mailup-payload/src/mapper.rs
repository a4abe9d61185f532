//! Contact → request mapping.

use std::collections::BTreeMap;

use mailup_core::{
  Result,
  config::AdapterConfig,
  contact::{ContactRecord, FieldValue},
  field::{FieldSpec, PayloadShape},
};

use crate::request::{FieldDescriptor, RequestFields, SubscriptionRequest};

/// Stand-in for blank values in descriptor payloads; the remote rejects an
/// empty email, name or descriptor value.
pub const BLANK_PLACEHOLDER: &str = "-";

/// Builds [`SubscriptionRequest`]s from contacts according to the configured
/// field layout.
#[derive(Debug, Clone)]
pub struct FieldMapper {
  email_field: String,
  name_field:  String,
  fields:      Vec<FieldSpec>,
  shape:       PayloadShape,
}

impl FieldMapper {
  pub fn new(
    email_field: impl Into<String>,
    name_field: impl Into<String>,
    fields: Vec<FieldSpec>,
    shape: PayloadShape,
  ) -> Self {
    Self {
      email_field: email_field.into(),
      name_field: name_field.into(),
      fields,
      shape,
    }
  }

  pub fn from_config(config: &AdapterConfig) -> Self {
    Self::new(
      config.email_field.clone(),
      config.name_field.clone(),
      config.contact_fields.clone(),
      config.payload_shape,
    )
  }

  pub fn shape(&self) -> PayloadShape { self.shape }

  pub fn fields(&self) -> &[FieldSpec] { &self.fields }

  /// Build a request in the configured shape.
  pub fn build<C: ContactRecord + ?Sized>(&self, contact: &C) -> Result<SubscriptionRequest> {
    self.build_with_shape(contact, self.shape)
  }

  /// Build a request in an explicit shape.
  ///
  /// Fails on the first field the contact does not expose. In descriptor
  /// shape every blank value, email and name included, becomes
  /// [`BLANK_PLACEHOLDER`]; object shape sends values as they are.
  pub fn build_with_shape<C: ContactRecord + ?Sized>(
    &self,
    contact: &C,
    shape: PayloadShape,
  ) -> Result<SubscriptionRequest> {
    let mut email = contact.get_field(&self.email_field)?;
    let mut name = contact.get_field(&self.name_field)?;

    let fields = match shape {
      PayloadShape::Object => {
        let mut map = BTreeMap::new();
        for spec in &self.fields {
          map.insert(spec.name.clone(), contact.get_field(&spec.name)?);
        }
        RequestFields::Object(map)
      }
      PayloadShape::Descriptors => {
        let mut list = Vec::with_capacity(self.fields.len());
        for spec in &self.fields {
          list.push(FieldDescriptor {
            description: spec.name.clone(),
            id:          spec.id.clone(),
            value:       placeholder_if_blank(contact.get_field(&spec.name)?),
          });
        }
        email = placeholder_if_blank(email);
        name = placeholder_if_blank(name);
        RequestFields::Descriptors(list)
      }
    };

    Ok(SubscriptionRequest { email, name, fields })
  }

  /// Map every contact into the descriptor shape for a bulk import.
  ///
  /// Order follows the input; nothing is serialized here.
  pub fn build_batch<'a, C, I>(&self, contacts: I) -> Result<Vec<SubscriptionRequest>>
  where
    C: ContactRecord + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
  {
    contacts
      .into_iter()
      .map(|c| self.build_with_shape(c, PayloadShape::Descriptors))
      .collect()
  }
}

fn placeholder_if_blank(value: FieldValue) -> FieldValue {
  if value.is_blank() { FieldValue::from(BLANK_PLACEHOLDER) } else { value }
}

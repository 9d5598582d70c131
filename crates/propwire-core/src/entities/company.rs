use crate::schema::{Entity, EntityList, FieldDef, FieldKind, SchemaDef};
use crate::value::{CoercionError, WireValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A company record (`/companies/v2`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub company_id: Option<i64>,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub industry: Option<String>,
    pub number_of_employees: Option<i64>,
    pub annual_revenue: Option<f64>,
    pub is_public: Option<bool>,
}

impl Entity for Company {
    fn schema() -> SchemaDef {
        SchemaDef::new("company")
            .field(FieldDef::new("company_id", FieldKind::Integer).wire("companyId").identity())
            .field(FieldDef::new("name", FieldKind::Text))
            .field(FieldDef::new("domain", FieldKind::Text))
            .field(FieldDef::new("industry", FieldKind::Text))
            .field(FieldDef::new("number_of_employees", FieldKind::Integer).wire("numberofemployees"))
            .field(FieldDef::new("annual_revenue", FieldKind::Decimal).wire("annualrevenue"))
            .field(FieldDef::new("is_public", FieldKind::Boolean))
    }

    fn read_field(&self, field: &str) -> Option<Value> {
        match field {
            "company_id" => self.company_id.to_wire(),
            "name" => self.name.to_wire(),
            "domain" => self.domain.to_wire(),
            "industry" => self.industry.to_wire(),
            "number_of_employees" => self.number_of_employees.to_wire(),
            "annual_revenue" => self.annual_revenue.to_wire(),
            "is_public" => self.is_public.to_wire(),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &Value) -> Result<(), CoercionError> {
        match field {
            "company_id" => self.company_id = WireValue::from_wire(value)?,
            "name" => self.name = WireValue::from_wire(value)?,
            "domain" => self.domain = WireValue::from_wire(value)?,
            "industry" => self.industry = WireValue::from_wire(value)?,
            "number_of_employees" => self.number_of_employees = WireValue::from_wire(value)?,
            "annual_revenue" => self.annual_revenue = WireValue::from_wire(value)?,
            "is_public" => self.is_public = WireValue::from_wire(value)?,
            _ => {}
        }
        Ok(())
    }

    fn route() -> Option<&'static str> {
        Some("/companies/v2/companies")
    }
}

/// Page of companies as returned by `/companies/v2/companies/paged`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyList {
    pub companies: Vec<Company>,
    pub has_more: Option<bool>,
    pub offset: Option<i64>,
}

impl Entity for CompanyList {
    fn schema() -> SchemaDef {
        SchemaDef::new("company_list")
            .field(FieldDef::new("companies", FieldKind::Collection { element: "company" }))
            .field(FieldDef::new("has_more", FieldKind::Boolean).wire("has-more"))
            .field(FieldDef::new("offset", FieldKind::Integer))
    }

    fn read_field(&self, field: &str) -> Option<Value> {
        match field {
            "has_more" => self.has_more.to_wire(),
            "offset" => self.offset.to_wire(),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &Value) -> Result<(), CoercionError> {
        match field {
            "has_more" => self.has_more = WireValue::from_wire(value)?,
            "offset" => self.offset = WireValue::from_wire(value)?,
            _ => {}
        }
        Ok(())
    }

    fn route() -> Option<&'static str> {
        Some("/companies/v2/companies/paged")
    }
}

impl EntityList for CompanyList {
    type Item = Company;

    fn set_items(&mut self, items: Vec<Company>) {
        self.companies = items;
    }

    fn items(&self) -> &[Company] {
        &self.companies
    }
}

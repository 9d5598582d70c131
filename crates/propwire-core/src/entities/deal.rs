use crate::schema::{Entity, EntityList, FieldDef, FieldKind, SchemaDef};
use crate::value::{CoercionError, WireValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A deal record (`/deals/v1`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deal {
    pub deal_id: Option<i64>,
    pub deal_name: Option<String>,
    pub amount: Option<f64>,
    pub deal_stage: Option<String>,
    pub pipeline: Option<String>,
    pub close_date: Option<DateTime<Utc>>,
}

impl Entity for Deal {
    fn schema() -> SchemaDef {
        SchemaDef::new("deal")
            .field(FieldDef::new("deal_id", FieldKind::Integer).wire("dealId").identity())
            .field(FieldDef::new("deal_name", FieldKind::Text).wire("dealname"))
            .field(FieldDef::new("amount", FieldKind::Decimal))
            .field(FieldDef::new("deal_stage", FieldKind::Text).wire("dealstage"))
            .field(FieldDef::new("pipeline", FieldKind::Text))
            .field(FieldDef::new("close_date", FieldKind::Timestamp).wire("closedate"))
    }

    fn read_field(&self, field: &str) -> Option<Value> {
        match field {
            "deal_id" => self.deal_id.to_wire(),
            "deal_name" => self.deal_name.to_wire(),
            "amount" => self.amount.to_wire(),
            "deal_stage" => self.deal_stage.to_wire(),
            "pipeline" => self.pipeline.to_wire(),
            "close_date" => self.close_date.to_wire(),
            _ => None,
        }
    }

    fn write_field(&mut self, field: &str, value: &Value) -> Result<(), CoercionError> {
        match field {
            "deal_id" => self.deal_id = WireValue::from_wire(value)?,
            "deal_name" => self.deal_name = WireValue::from_wire(value)?,
            "amount" => self.amount = WireValue::from_wire(value)?,
            "deal_stage" => self.deal_stage = WireValue::from_wire(value)?,
            "pipeline" => self.pipeline = WireValue::from_wire(value)?,
            "close_date" => self.close_date = WireValue::from_wire(value)?,
            _ => {}
        }
        Ok(())
    }

    fn route() -> Option<&'static str> {
        Some("/deals/v1/deal")
    }
}

/// Page of deals as returned by `/deals/v1/deal/paged`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealList {
    pub deals: Vec<Deal>,
    pub has_more: Option<bool>,
    pub offset: Option<i64>,
}

impl Entity for DealList {
    fn schema() -> SchemaDef {
        SchemaDef::new("deal_list")
            .field(FieldDef::new("deals", FieldKind::Collection { element: "deal" }))
            .field(FieldDef::new("has_more", FieldKind::Boolean).wire("hasMore"))
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
        Some("/deals/v1/deal/paged")
    }
}

impl EntityList for DealList {
    type Item = Deal;

    fn set_items(&mut self, items: Vec<Deal>) {
        self.deals = items;
    }

    fn items(&self) -> &[Deal] {
        &self.deals
    }
}

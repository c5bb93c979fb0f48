mod object_tests;

use crate::schema::EffectiveSchema;
use serde_json::Value;

pub(crate) fn schema(raw: Value) -> EffectiveSchema {
    EffectiveSchema::resolve(&raw)
}

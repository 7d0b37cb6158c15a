//! Drug export query and record shape.

use anyhow::Result;
use gex_export::CsvRecord;
use neo4rs::Query;
use serde::{Deserialize, Serialize};

use crate::GraphClient;

/// One outgoing relationship of a drug, as collected by the export
/// query.
///
/// All three fields are null together when the drug has no outgoing
/// relationships at all: the `OPTIONAL MATCH` still produces one row,
/// and `collect` keeps its null-filled map as a single placeholder
/// entry. That placeholder is preserved in the output as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRelationship {
    pub relation_type: Option<String>,
    pub related_name: Option<String>,
    pub related_id: Option<String>,
}

/// One exported drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecord {
    pub id: String,
    pub name: String,
    pub drugbank_id: String,
    pub cas_number: String,
    pub aliases: Vec<String>,
    pub relationships: Vec<DrugRelationship>,
}

impl CsvRecord for DrugRecord {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "drugbank_id", "cas_number", "aliases", "relationships"];

    fn to_row(&self) -> Vec<String> {
        // The list columns keep their native debug rendering. The flat
        // CSV layout for them was never pinned down upstream, so the
        // raw form is kept rather than inventing one (see DESIGN.md).
        vec![
            self.id.clone(),
            self.name.clone(),
            self.drugbank_id.clone(),
            self.cas_number.clone(),
            format!("{:?}", self.aliases),
            format!("{:?}", self.relationships),
        ]
    }
}

const DRUG_EXPORT_QUERY: &str = "\
    MATCH (d:Drug)
    OPTIONAL MATCH (d)-[r]->(t)
    WITH d, collect(DISTINCT {
        relation_type: type(r),
        related_name: t.name,
        related_id: t.id
    }) AS relationships
    RETURN d.id AS id,
           d.name AS name,
           d.drugbank_id AS drugbank_id,
           d.cas_number AS cas_number,
           d.aliases AS aliases,
           relationships";

/// Fetch every drug with its aliases and outgoing relationships.
pub async fn fetch_drugs(client: &GraphClient) -> Result<Vec<DrugRecord>> {
    let rows = client.query(Query::new(DRUG_EXPORT_QUERY.to_string())).await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        records.push(DrugRecord {
            id: row.get("id").unwrap_or_default(),
            name: row.get("name").unwrap_or_default(),
            drugbank_id: row.get("drugbank_id").unwrap_or_default(),
            cas_number: row.get("cas_number").unwrap_or_default(),
            aliases: row.get("aliases").unwrap_or_default(),
            relationships: row.get("relationships").unwrap_or_default(),
        });
    }

    tracing::info!(count = records.len(), "fetched drug records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DrugRecord {
        DrugRecord {
            id: "D001".to_string(),
            name: "Aspirin".to_string(),
            drugbank_id: "DB00945".to_string(),
            cas_number: "50-78-2".to_string(),
            aliases: vec!["acetylsalicylic acid".to_string(), "ASA".to_string()],
            relationships: vec![DrugRelationship {
                relation_type: Some("TARGETS".to_string()),
                related_name: Some("COX-1".to_string()),
                related_id: Some("P23219".to_string()),
            }],
        }
    }

    #[test]
    fn test_csv_row_order_matches_headers() {
        let row = sample().to_row();
        assert_eq!(row.len(), DrugRecord::HEADERS.len());
        assert_eq!(row[0], "D001");
        assert_eq!(row[1], "Aspirin");
        assert_eq!(row[2], "DB00945");
        assert_eq!(row[3], "50-78-2");
    }

    #[test]
    fn test_csv_list_columns_keep_debug_form() {
        let row = sample().to_row();
        assert_eq!(row[4], r#"["acetylsalicylic acid", "ASA"]"#);
        assert!(row[5].starts_with("[DrugRelationship {"));
        assert!(row[5].contains(r#"relation_type: Some("TARGETS")"#));
    }

    #[test]
    fn test_placeholder_relationship_survives_serialization() {
        let record = DrugRecord {
            relationships: vec![DrugRelationship {
                relation_type: None,
                related_name: None,
                related_id: None,
            }],
            ..sample()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json["relationships"],
            serde_json::json!([{
                "relation_type": null,
                "related_name": null,
                "related_id": null
            }])
        );
    }
}

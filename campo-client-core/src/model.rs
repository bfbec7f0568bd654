//! The domain records: flat relational rows mirroring the backing schema.
//!
//! Field names are the wire names, in the schema's language. Every record
//! except [`Property`] and [`User`] carries the `propriedade_id` of the
//! property (tenant) it belongs to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

id_type!(
    /// Identifies a farm property: the tenant that scopes every other record.
    PropertyId
);
id_type!(SectorId);
id_type!(LotId);
id_type!(BedId);
id_type!(CropId);
id_type!(IrrigationId);
id_type!(PestId);
id_type!(TransactionId);
id_type!(ProductId);
id_type!(StockMovementId);
id_type!(UserId);

/// A farm property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localizacao: Option<String>,
}

/// A sector of a property, optionally tied to a crop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: SectorId,
    pub nome: String,
    pub propriedade_id: PropertyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Polygon coordinates as drawn on the map, opaque to this layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordenadas: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
}

/// A lot inside a sector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: LotId,
    pub nome: String,
    pub setor_id: SectorId,
    pub propriedade_id: PropertyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_plantio: Option<String>,
}

/// A bed inside a lot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub id: BedId,
    pub nome: String,
    pub lote_id: LotId,
    pub propriedade_id: PropertyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultura_id: Option<CropId>,
}

/// A crop grown on the property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: CropId,
    pub nome: String,
    pub propriedade_id: PropertyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variedade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciclo_dias: Option<i32>,
}

/// One irrigation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Irrigation {
    pub id: IrrigationId,
    pub propriedade_id: PropertyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setor_id: Option<SectorId>,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_litros: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duracao_minutos: Option<i32>,
}

/// A pest occurrence record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pest {
    pub id: PestId,
    pub nome: String,
    pub propriedade_id: PropertyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lote_id: Option<LotId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_ocorrencia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tratamento: Option<String>,
}

/// Whether money came in or went out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Receita,
    Despesa,
}

/// A financial transaction of the property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub propriedade_id: PropertyId,
    pub descricao: String,
    pub valor: f64,
    pub tipo: TransactionType,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
}

/// A stocked product. Its current level is derived from movements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub nome: String,
    pub propriedade_id: PropertyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantidade_minima: Option<f64>,
}

/// Direction of a stock movement.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Entrada,
    Saida,
}

/// One stock movement against a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: StockMovementId,
    pub propriedade_id: PropertyId,
    pub produto_id: ProductId,
    pub tipo: MovementType,
    pub quantidade: f64,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacao: Option<String>,
}

/// A user row as stored, including the credential column the login
/// comparison needs. Never persisted client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: UserId,
    pub nome: String,
    pub email: String,
    pub senha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

/// A user's public profile: what the session holds and what gets persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nome: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propriedade_id: Option<PropertyId>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            nome: row.nome,
            email: row.email,
            propriedade_id: row.propriedade_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn public_profile_carries_no_credential() {
        let row = UserRow {
            id: "u1".into(),
            nome: "Maria".to_string(),
            email: "maria@campo.agr.br".to_string(),
            senha: "hunter2".to_string(),
            propriedade_id: Some("p1".into()),
        };
        let user = User::from(row);
        let serialized = serde_json::to_value(&user).unwrap();
        assert_eq!(
            serialized,
            json!({
                "id": "u1",
                "nome": "Maria",
                "email": "maria@campo.agr.br",
                "propriedade_id": "p1",
            })
        );
    }

    #[test]
    fn transaction_type_uses_wire_casing() {
        assert_eq!(
            serde_json::to_value(TransactionType::Receita).unwrap(),
            json!("receita")
        );
        assert_eq!(
            serde_json::from_value::<MovementType>(json!("saida")).unwrap(),
            MovementType::Saida
        );
    }
}

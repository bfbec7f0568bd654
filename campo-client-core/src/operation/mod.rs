//! The operation registry, organized by entity.
//!
//! Every document the application can dispatch is registered here as a
//! variant of [`OperationName`]. The set is closed: a lookup cannot come
//! back empty, so the malformed-request failure mode of a string-keyed
//! registry does not exist. Each operation also fixes its variables and
//! result payload types at compile time, and each mutation declares which
//! query results it invalidates.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::model::PropertyId;

macro_rules! property_scoped {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::operation::PropertyScoped for $ty {
            fn propriedade_id(&self) -> Option<&$crate::model::PropertyId> {
                self.propriedade_id.as_ref()
            }

            fn set_propriedade_id(&mut self, id: $crate::model::PropertyId) {
                self.propriedade_id = Some(id);
            }
        }
    )+};
}

pub mod bed;
pub mod crop;
pub mod irrigation;
pub mod lot;
pub mod pest;
pub mod property;
pub mod sector;
pub mod stock;
pub mod transaction;
pub mod user;

/// Whether a document reads or writes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// The keyword opening a document of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// Every operation the application can dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum OperationName {
    ListProperties,
    GetProperty,
    InsertProperty,
    UpdateProperty,
    DeleteProperty,
    ListSectors,
    InsertSector,
    UpdateSector,
    DeleteSector,
    ListLots,
    InsertLot,
    UpdateLot,
    DeleteLot,
    ListBeds,
    InsertBed,
    UpdateBed,
    DeleteBed,
    ListCrops,
    InsertCrop,
    UpdateCrop,
    DeleteCrop,
    ListIrrigations,
    InsertIrrigation,
    DeleteIrrigation,
    ListPests,
    InsertPest,
    UpdatePest,
    DeletePest,
    ListTransactions,
    InsertTransaction,
    UpdateTransaction,
    DeleteTransaction,
    ListProducts,
    InsertProduct,
    UpdateProduct,
    DeleteProduct,
    ListStockMovements,
    InsertStockMovement,
    GetUserByEmail,
    RegisterUser,
    UpdateUser,
}

impl OperationName {
    /// The GraphQL document registered under this name.
    pub fn document(&self) -> &'static str {
        match self {
            OperationName::ListProperties => property::LIST_PROPERTIES,
            OperationName::GetProperty => property::GET_PROPERTY,
            OperationName::InsertProperty => property::INSERT_PROPERTY,
            OperationName::UpdateProperty => property::UPDATE_PROPERTY,
            OperationName::DeleteProperty => property::DELETE_PROPERTY,
            OperationName::ListSectors => sector::LIST_SECTORS,
            OperationName::InsertSector => sector::INSERT_SECTOR,
            OperationName::UpdateSector => sector::UPDATE_SECTOR,
            OperationName::DeleteSector => sector::DELETE_SECTOR,
            OperationName::ListLots => lot::LIST_LOTS,
            OperationName::InsertLot => lot::INSERT_LOT,
            OperationName::UpdateLot => lot::UPDATE_LOT,
            OperationName::DeleteLot => lot::DELETE_LOT,
            OperationName::ListBeds => bed::LIST_BEDS,
            OperationName::InsertBed => bed::INSERT_BED,
            OperationName::UpdateBed => bed::UPDATE_BED,
            OperationName::DeleteBed => bed::DELETE_BED,
            OperationName::ListCrops => crop::LIST_CROPS,
            OperationName::InsertCrop => crop::INSERT_CROP,
            OperationName::UpdateCrop => crop::UPDATE_CROP,
            OperationName::DeleteCrop => crop::DELETE_CROP,
            OperationName::ListIrrigations => irrigation::LIST_IRRIGATIONS,
            OperationName::InsertIrrigation => irrigation::INSERT_IRRIGATION,
            OperationName::DeleteIrrigation => irrigation::DELETE_IRRIGATION,
            OperationName::ListPests => pest::LIST_PESTS,
            OperationName::InsertPest => pest::INSERT_PEST,
            OperationName::UpdatePest => pest::UPDATE_PEST,
            OperationName::DeletePest => pest::DELETE_PEST,
            OperationName::ListTransactions => transaction::LIST_TRANSACTIONS,
            OperationName::InsertTransaction => transaction::INSERT_TRANSACTION,
            OperationName::UpdateTransaction => transaction::UPDATE_TRANSACTION,
            OperationName::DeleteTransaction => transaction::DELETE_TRANSACTION,
            OperationName::ListProducts => stock::LIST_PRODUCTS,
            OperationName::InsertProduct => stock::INSERT_PRODUCT,
            OperationName::UpdateProduct => stock::UPDATE_PRODUCT,
            OperationName::DeleteProduct => stock::DELETE_PRODUCT,
            OperationName::ListStockMovements => stock::LIST_STOCK_MOVEMENTS,
            OperationName::InsertStockMovement => stock::INSERT_STOCK_MOVEMENT,
            OperationName::GetUserByEmail => user::GET_USER_BY_EMAIL,
            OperationName::RegisterUser => user::REGISTER_USER,
            OperationName::UpdateUser => user::UPDATE_USER,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            OperationName::ListProperties
            | OperationName::GetProperty
            | OperationName::ListSectors
            | OperationName::ListLots
            | OperationName::ListBeds
            | OperationName::ListCrops
            | OperationName::ListIrrigations
            | OperationName::ListPests
            | OperationName::ListTransactions
            | OperationName::ListProducts
            | OperationName::ListStockMovements
            | OperationName::GetUserByEmail => OperationKind::Query,
            _ => OperationKind::Mutation,
        }
    }
}

/// A dispatchable operation: a registered document plus its variables and
/// result payload types.
pub trait Operation: Send + Sync + 'static {
    const NAME: OperationName;

    type Variables: Serialize + Clone + Debug + Send + Sync;
    type Data: DeserializeOwned + Clone + Debug + Send + Sync;
}

/// A read. Results are cached by `(name, variables)` until invalidated.
pub trait QueryOperation: Operation {}

/// A write. Results are never cached; on success the queries named in
/// [`INVALIDATES`](MutationOperation::INVALIDATES) are dropped from the
/// cache, whatever their variables.
pub trait MutationOperation: Operation {
    const INVALIDATES: &'static [OperationName];
}

/// Variables carrying the tenant scope.
///
/// The property id is a dedicated typed field, so a caller-supplied
/// variable can never collide with the one the scoping helper injects.
pub trait PropertyScoped {
    fn propriedade_id(&self) -> Option<&PropertyId>;

    fn set_propriedade_id(&mut self, id: PropertyId);
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_operation_has_a_matching_document() {
        for name in OperationName::iter() {
            let document = name.document();
            assert!(
                !document.trim().is_empty(),
                "{name} registered an empty document"
            );
            let header = format!("{} {}", name.kind().keyword(), name);
            assert!(
                document.trim_start().starts_with(&header),
                "document for {name} must open with `{header}`"
            );
        }
    }

    #[test]
    fn operation_names_are_unique() {
        let names: HashSet<&'static str> = OperationName::iter().map(Into::into).collect();
        assert_eq!(names.len(), OperationName::iter().count());
    }

    #[test]
    fn mutations_invalidate_queries_only() {
        fn check(invalidates: &[OperationName]) {
            for name in invalidates {
                assert_eq!(
                    name.kind(),
                    OperationKind::Query,
                    "{name} is declared as an invalidation target but is not a query"
                );
            }
        }

        check(<property::InsertProperty as MutationOperation>::INVALIDATES);
        check(<property::UpdateProperty as MutationOperation>::INVALIDATES);
        check(<property::DeleteProperty as MutationOperation>::INVALIDATES);
        check(<sector::InsertSector as MutationOperation>::INVALIDATES);
        check(<sector::UpdateSector as MutationOperation>::INVALIDATES);
        check(<sector::DeleteSector as MutationOperation>::INVALIDATES);
        check(<lot::InsertLot as MutationOperation>::INVALIDATES);
        check(<lot::UpdateLot as MutationOperation>::INVALIDATES);
        check(<lot::DeleteLot as MutationOperation>::INVALIDATES);
        check(<bed::InsertBed as MutationOperation>::INVALIDATES);
        check(<bed::UpdateBed as MutationOperation>::INVALIDATES);
        check(<bed::DeleteBed as MutationOperation>::INVALIDATES);
        check(<crop::InsertCrop as MutationOperation>::INVALIDATES);
        check(<crop::UpdateCrop as MutationOperation>::INVALIDATES);
        check(<crop::DeleteCrop as MutationOperation>::INVALIDATES);
        check(<irrigation::InsertIrrigation as MutationOperation>::INVALIDATES);
        check(<irrigation::DeleteIrrigation as MutationOperation>::INVALIDATES);
        check(<pest::InsertPest as MutationOperation>::INVALIDATES);
        check(<pest::UpdatePest as MutationOperation>::INVALIDATES);
        check(<pest::DeletePest as MutationOperation>::INVALIDATES);
        check(<transaction::InsertTransaction as MutationOperation>::INVALIDATES);
        check(<transaction::UpdateTransaction as MutationOperation>::INVALIDATES);
        check(<transaction::DeleteTransaction as MutationOperation>::INVALIDATES);
        check(<stock::InsertProduct as MutationOperation>::INVALIDATES);
        check(<stock::UpdateProduct as MutationOperation>::INVALIDATES);
        check(<stock::DeleteProduct as MutationOperation>::INVALIDATES);
        check(<stock::InsertStockMovement as MutationOperation>::INVALIDATES);
        check(<user::RegisterUser as MutationOperation>::INVALIDATES);
        check(<user::UpdateUser as MutationOperation>::INVALIDATES);
    }
}

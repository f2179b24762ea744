//! Strongly-typed identifiers and status vocabularies.
//!
//! Two vocabularies coexist: the persistence layer stores fine-grained
//! Spanish values (`Operativo`, `En_Mantenimiento`, ...) while the view model
//! works with coarser English values (`operational`, `maintenance`, ...).
//! Each pair is connected by two explicit total lookup tables: the
//! wire-to-view projection (`From`) and the view-to-wire canonical inverse
//! (`canonical`). The projection collapses several wire values onto one view
//! value, so `canonical` picks one representative per view value and round
//! trips through the wire vocabulary are not identity-preserving.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when constructing a constrained value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Stored status text does not belong to the expected vocabulary.
    #[error("unknown value `{value}` for {field}")]
    UnknownValue {
        field: &'static str,
        value: String,
    },
}

impl VocabularyError {
    pub(crate) fn unknown(field: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            field,
            value: value.to_string(),
        }
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, VocabularyError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(VocabularyError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = VocabularyError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ClienteId, "Unique identifier for a client organization.");
id_newtype!(EquipoId, "Unique identifier for an equipment unit.");
id_newtype!(OrdenId, "Unique identifier for a work order.");
id_newtype!(ModalidadId, "Unique identifier for an imaging modality.");
id_newtype!(FabricanteId, "Unique identifier for a manufacturer.");
id_newtype!(TecnicoId, "Unique identifier for a technician.");

/// Lifecycle status of an equipment unit as stored by the persistence layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EstadoEquipo {
    Operativo,
    EnMantenimiento,
    FueraDeServicio,
    Desinstalado,
}

impl EstadoEquipo {
    pub const ALL: [EstadoEquipo; 4] = [
        EstadoEquipo::Operativo,
        EstadoEquipo::EnMantenimiento,
        EstadoEquipo::FueraDeServicio,
        EstadoEquipo::Desinstalado,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EstadoEquipo::Operativo => "Operativo",
            EstadoEquipo::EnMantenimiento => "En_Mantenimiento",
            EstadoEquipo::FueraDeServicio => "Fuera_de_Servicio",
            EstadoEquipo::Desinstalado => "Desinstalado",
        }
    }
}

impl Display for EstadoEquipo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstadoEquipo {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Operativo" => Ok(EstadoEquipo::Operativo),
            "En_Mantenimiento" => Ok(EstadoEquipo::EnMantenimiento),
            "Fuera_de_Servicio" => Ok(EstadoEquipo::FueraDeServicio),
            "Desinstalado" => Ok(EstadoEquipo::Desinstalado),
            other => Err(VocabularyError::unknown("estado", other)),
        }
    }
}

/// Equipment status as consumed by the view model.
///
/// `Fuera_de_Servicio` and `Desinstalado` both project onto `OutOfService`;
/// the canonical inverse is `Fuera_de_Servicio`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentStatus {
    Operational,
    Maintenance,
    OutOfService,
}

impl EquipmentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "operational",
            EquipmentStatus::Maintenance => "maintenance",
            EquipmentStatus::OutOfService => "out-of-service",
        }
    }

    /// Canonical wire value for this view status.
    pub const fn canonical(self) -> EstadoEquipo {
        match self {
            EquipmentStatus::Operational => EstadoEquipo::Operativo,
            EquipmentStatus::Maintenance => EstadoEquipo::EnMantenimiento,
            EquipmentStatus::OutOfService => EstadoEquipo::FueraDeServicio,
        }
    }
}

impl From<EstadoEquipo> for EquipmentStatus {
    fn from(estado: EstadoEquipo) -> Self {
        match estado {
            EstadoEquipo::Operativo => EquipmentStatus::Operational,
            EstadoEquipo::EnMantenimiento => EquipmentStatus::Maintenance,
            EstadoEquipo::FueraDeServicio | EstadoEquipo::Desinstalado => {
                EquipmentStatus::OutOfService
            }
        }
    }
}

impl Display for EquipmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operational" => Ok(EquipmentStatus::Operational),
            "maintenance" => Ok(EquipmentStatus::Maintenance),
            "out-of-service" => Ok(EquipmentStatus::OutOfService),
            other => Err(VocabularyError::unknown("estado", other)),
        }
    }
}

/// Organization type of a client as stored by the persistence layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TipoCliente {
    Hospital,
    Clinica,
    CentroMedico,
    Laboratorio,
}

impl TipoCliente {
    pub const ALL: [TipoCliente; 4] = [
        TipoCliente::Hospital,
        TipoCliente::Clinica,
        TipoCliente::CentroMedico,
        TipoCliente::Laboratorio,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TipoCliente::Hospital => "Hospital",
            TipoCliente::Clinica => "Clínica",
            TipoCliente::CentroMedico => "Centro_Médico",
            TipoCliente::Laboratorio => "Laboratorio",
        }
    }
}

impl Display for TipoCliente {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoCliente {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hospital" => Ok(TipoCliente::Hospital),
            "Clínica" => Ok(TipoCliente::Clinica),
            "Centro_Médico" => Ok(TipoCliente::CentroMedico),
            "Laboratorio" => Ok(TipoCliente::Laboratorio),
            other => Err(VocabularyError::unknown("tipo", other)),
        }
    }
}

/// Client sector as consumed by the view model.
///
/// Hospitals and medical centers project onto `Public`, clinics and
/// laboratories onto `Private`. Canonical inverses: `Hospital` and `Clínica`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClientSector {
    Public,
    Private,
}

impl ClientSector {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClientSector::Public => "public",
            ClientSector::Private => "private",
        }
    }

    /// Canonical wire value for this sector.
    pub const fn canonical(self) -> TipoCliente {
        match self {
            ClientSector::Public => TipoCliente::Hospital,
            ClientSector::Private => TipoCliente::Clinica,
        }
    }
}

impl From<TipoCliente> for ClientSector {
    fn from(tipo: TipoCliente) -> Self {
        match tipo {
            TipoCliente::Hospital | TipoCliente::CentroMedico => ClientSector::Public,
            TipoCliente::Clinica | TipoCliente::Laboratorio => ClientSector::Private,
        }
    }
}

impl Display for ClientSector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientSector {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(ClientSector::Public),
            "private" => Ok(ClientSector::Private),
            other => Err(VocabularyError::unknown("sector", other)),
        }
    }
}

/// Work order priority as stored by the persistence layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrioridadOrden {
    Baja,
    Media,
    Alta,
    Critica,
}

impl PrioridadOrden {
    pub const ALL: [PrioridadOrden; 4] = [
        PrioridadOrden::Baja,
        PrioridadOrden::Media,
        PrioridadOrden::Alta,
        PrioridadOrden::Critica,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PrioridadOrden::Baja => "Baja",
            PrioridadOrden::Media => "Media",
            PrioridadOrden::Alta => "Alta",
            PrioridadOrden::Critica => "Crítica",
        }
    }
}

impl Display for PrioridadOrden {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrioridadOrden {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Baja" => Ok(PrioridadOrden::Baja),
            "Media" => Ok(PrioridadOrden::Media),
            "Alta" => Ok(PrioridadOrden::Alta),
            "Crítica" => Ok(PrioridadOrden::Critica),
            other => Err(VocabularyError::unknown("prioridad", other)),
        }
    }
}

/// Work order priority as consumed by the view model.
///
/// `Baja` and `Media` both project onto `Normal`; the canonical inverse is
/// `Media`, so a `Baja` order that round trips through the view model comes
/// back as `Media`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Normal,
    High,
    Critical,
}

impl OrderPriority {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderPriority::Normal => "normal",
            OrderPriority::High => "high",
            OrderPriority::Critical => "critical",
        }
    }

    /// Canonical wire value for this priority.
    pub const fn canonical(self) -> PrioridadOrden {
        match self {
            OrderPriority::Normal => PrioridadOrden::Media,
            OrderPriority::High => PrioridadOrden::Alta,
            OrderPriority::Critical => PrioridadOrden::Critica,
        }
    }
}

impl From<PrioridadOrden> for OrderPriority {
    fn from(prioridad: PrioridadOrden) -> Self {
        match prioridad {
            PrioridadOrden::Baja | PrioridadOrden::Media => OrderPriority::Normal,
            PrioridadOrden::Alta => OrderPriority::High,
            PrioridadOrden::Critica => OrderPriority::Critical,
        }
    }
}

impl Display for OrderPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderPriority {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(OrderPriority::Normal),
            "high" => Ok(OrderPriority::High),
            "critical" => Ok(OrderPriority::Critical),
            other => Err(VocabularyError::unknown("prioridad", other)),
        }
    }
}

/// Work order lifecycle status as stored by the persistence layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EstadoOrden {
    Abierta,
    Asignada,
    EnProgreso,
    EnEspera,
    Cerrada,
    Cancelada,
}

impl EstadoOrden {
    pub const ALL: [EstadoOrden; 6] = [
        EstadoOrden::Abierta,
        EstadoOrden::Asignada,
        EstadoOrden::EnProgreso,
        EstadoOrden::EnEspera,
        EstadoOrden::Cerrada,
        EstadoOrden::Cancelada,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EstadoOrden::Abierta => "Abierta",
            EstadoOrden::Asignada => "Asignada",
            EstadoOrden::EnProgreso => "En_Progreso",
            EstadoOrden::EnEspera => "En_Espera",
            EstadoOrden::Cerrada => "Cerrada",
            EstadoOrden::Cancelada => "Cancelada",
        }
    }
}

impl Display for EstadoOrden {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstadoOrden {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Abierta" => Ok(EstadoOrden::Abierta),
            "Asignada" => Ok(EstadoOrden::Asignada),
            "En_Progreso" => Ok(EstadoOrden::EnProgreso),
            "En_Espera" => Ok(EstadoOrden::EnEspera),
            "Cerrada" => Ok(EstadoOrden::Cerrada),
            "Cancelada" => Ok(EstadoOrden::Cancelada),
            other => Err(VocabularyError::unknown("estado", other)),
        }
    }
}

/// Work order status as consumed by the view model.
///
/// `Asignada`, `En_Progreso` and `En_Espera` project onto `InProgress`;
/// `Cerrada` and `Cancelada` onto `Closed`. Canonical inverses:
/// `En_Progreso` and `Cerrada`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Open,
    InProgress,
    Closed,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Closed => "closed",
        }
    }

    /// Canonical wire value for this view status.
    pub const fn canonical(self) -> EstadoOrden {
        match self {
            OrderStatus::Open => EstadoOrden::Abierta,
            OrderStatus::InProgress => EstadoOrden::EnProgreso,
            OrderStatus::Closed => EstadoOrden::Cerrada,
        }
    }
}

impl From<EstadoOrden> for OrderStatus {
    fn from(estado: EstadoOrden) -> Self {
        match estado {
            EstadoOrden::Abierta => OrderStatus::Open,
            EstadoOrden::Asignada | EstadoOrden::EnProgreso | EstadoOrden::EnEspera => {
                OrderStatus::InProgress
            }
            EstadoOrden::Cerrada | EstadoOrden::Cancelada => OrderStatus::Closed,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(OrderStatus::Open),
            "in-progress" => Ok(OrderStatus::InProgress),
            "closed" => Ok(OrderStatus::Closed),
            other => Err(VocabularyError::unknown("estado", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_newtype_rejects_non_positive() {
        assert!(ClienteId::new(1).is_ok());
        assert_eq!(ClienteId::new(0), Err(VocabularyError::NonPositiveId));
        assert_eq!(EquipoId::new(-5), Err(VocabularyError::NonPositiveId));
    }

    #[test]
    fn estado_equipo_projection_is_total() {
        for estado in EstadoEquipo::ALL {
            // Every wire value must land on a defined view value.
            let status: EquipmentStatus = estado.into();
            assert!(!status.as_str().is_empty());
        }
    }

    #[test]
    fn out_of_service_folds_two_wire_values() {
        assert_eq!(
            EquipmentStatus::from(EstadoEquipo::FueraDeServicio),
            EquipmentStatus::OutOfService
        );
        assert_eq!(
            EquipmentStatus::from(EstadoEquipo::Desinstalado),
            EquipmentStatus::OutOfService
        );
        assert_eq!(
            EquipmentStatus::from(EstadoEquipo::Operativo),
            EquipmentStatus::Operational
        );
        assert_eq!(
            EquipmentStatus::from(EstadoEquipo::EnMantenimiento),
            EquipmentStatus::Maintenance
        );
    }

    #[test]
    fn desinstalado_does_not_round_trip() {
        // Lossy fold: the canonical inverse of out-of-service is
        // Fuera_de_Servicio, so Desinstalado normalizes away.
        let status = EquipmentStatus::from(EstadoEquipo::Desinstalado);
        assert_eq!(status.canonical(), EstadoEquipo::FueraDeServicio);
    }

    #[test]
    fn tipo_cliente_projection_is_total() {
        for tipo in TipoCliente::ALL {
            let sector: ClientSector = tipo.into();
            assert!(!sector.as_str().is_empty());
        }
        assert_eq!(ClientSector::from(TipoCliente::Hospital), ClientSector::Public);
        assert_eq!(
            ClientSector::from(TipoCliente::CentroMedico),
            ClientSector::Public
        );
        assert_eq!(ClientSector::from(TipoCliente::Clinica), ClientSector::Private);
        assert_eq!(
            ClientSector::from(TipoCliente::Laboratorio),
            ClientSector::Private
        );
    }

    #[test]
    fn sector_canonical_inverses() {
        assert_eq!(ClientSector::Public.canonical(), TipoCliente::Hospital);
        assert_eq!(ClientSector::Private.canonical(), TipoCliente::Clinica);
    }

    #[test]
    fn priority_canonical_representatives_are_stable() {
        // View -> wire -> view is the identity for every view value.
        for priority in [
            OrderPriority::Normal,
            OrderPriority::High,
            OrderPriority::Critical,
        ] {
            assert_eq!(OrderPriority::from(priority.canonical()), priority);
        }
    }

    #[test]
    fn baja_normalizes_to_media() {
        // Expected lossy behavior: Baja projects to normal, whose canonical
        // wire value is Media. Not a bug.
        let view = OrderPriority::from(PrioridadOrden::Baja);
        assert_eq!(view, OrderPriority::Normal);
        assert_eq!(view.canonical(), PrioridadOrden::Media);
    }

    #[test]
    fn prioridad_projection_is_total() {
        for prioridad in PrioridadOrden::ALL {
            let priority: OrderPriority = prioridad.into();
            assert!(!priority.as_str().is_empty());
        }
    }

    #[test]
    fn estado_orden_projection_is_total() {
        for estado in EstadoOrden::ALL {
            let status: OrderStatus = estado.into();
            assert!(!status.as_str().is_empty());
        }
        assert_eq!(OrderStatus::from(EstadoOrden::Asignada), OrderStatus::InProgress);
        assert_eq!(OrderStatus::from(EstadoOrden::EnEspera), OrderStatus::InProgress);
        assert_eq!(OrderStatus::from(EstadoOrden::Cancelada), OrderStatus::Closed);
    }

    #[test]
    fn wire_vocabularies_round_trip_their_own_strings() {
        for estado in EstadoEquipo::ALL {
            assert_eq!(estado.as_str().parse::<EstadoEquipo>(), Ok(estado));
        }
        for estado in EstadoOrden::ALL {
            assert_eq!(estado.as_str().parse::<EstadoOrden>(), Ok(estado));
        }
        for prioridad in PrioridadOrden::ALL {
            assert_eq!(prioridad.as_str().parse::<PrioridadOrden>(), Ok(prioridad));
        }
        for tipo in TipoCliente::ALL {
            assert_eq!(tipo.as_str().parse::<TipoCliente>(), Ok(tipo));
        }
    }

    #[test]
    fn unknown_wire_value_is_rejected() {
        let err = "Roto".parse::<EstadoEquipo>().unwrap_err();
        assert_eq!(err, VocabularyError::unknown("estado", "Roto"));
    }

    #[test]
    fn view_statuses_serialize_to_kebab_case() {
        assert_eq!(
            serde_json::to_string(&EquipmentStatus::OutOfService).unwrap(),
            "\"out-of-service\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&OrderPriority::Normal).unwrap(),
            "\"normal\""
        );
        assert_eq!(
            serde_json::to_string(&ClientSector::Public).unwrap(),
            "\"public\""
        );
    }
}

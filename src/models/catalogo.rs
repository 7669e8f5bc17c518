use serde::{Deserialize, Serialize};

use super::entity::{id_as_string, CatalogEntity, Entity};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Curso {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub nombre: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CursoInput {
    pub nombre: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Periodo {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub nombre: String, // ej. "2024-I"
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PeriodoInput {
    pub nombre: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Proveedor {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub celular: String, // 9 dígitos
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProveedorInput {
    pub nombre: String,
    pub celular: String,
}

impl Entity for Curso {
    type Input = CursoInput;
    type Patch = CursoInput;

    const RESOURCE: &'static str = "cursos";
    const LABEL: &'static str = "curso";

    fn id(&self) -> &str {
        &self.id
    }

    fn patch_from_input(input: CursoInput) -> CursoInput {
        input
    }
}

impl Entity for Periodo {
    type Input = PeriodoInput;
    type Patch = PeriodoInput;

    const RESOURCE: &'static str = "periodos";
    const LABEL: &'static str = "periodo";

    fn id(&self) -> &str {
        &self.id
    }

    fn patch_from_input(input: PeriodoInput) -> PeriodoInput {
        input
    }
}

impl Entity for Proveedor {
    type Input = ProveedorInput;
    type Patch = ProveedorInput;

    const RESOURCE: &'static str = "proveedores";
    const LABEL: &'static str = "proveedor";

    fn id(&self) -> &str {
        &self.id
    }

    fn patch_from_input(input: ProveedorInput) -> ProveedorInput {
        input
    }
}

impl CatalogEntity for Curso {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}

impl CatalogEntity for Periodo {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}

impl CatalogEntity for Proveedor {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}

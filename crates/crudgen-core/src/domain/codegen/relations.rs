//! Relation expansion for objects declaring `child_of`.
//!
//! For every foreign name, in declaration order, the edit controller gets an
//! injected service, a bound service argument, a fetch function and its call
//! site. The edit view gets a select widget only when the name resolves to
//! a declared object.

use tracing::{debug, warn};

use crate::domain::{
    codegen::{
        context::{GenerationContext, RelationPolicy},
        fragments::foreign_select,
        substitution::{Placeholder, Substitutions},
    },
    entities::ObjectSpec,
    error::DomainError,
    naming::capitalize,
};

/// Aggregated relation fragments of one object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationFragments {
    /// `'ownersService', ` per relation.
    pub inject_services: String,
    /// `ownersService, ` per relation.
    pub services: String,
    pub fetch_functions: String,
    pub fetch_calls: String,
    /// Select widgets for the relations that resolved.
    pub selects: String,
    /// Foreign names that matched no declared object.
    pub unresolved: Vec<String>,
}

impl RelationFragments {
    /// Edit-controller slots.
    pub fn controller_substitutions(&self) -> Substitutions {
        Substitutions::new()
            .set(Placeholder::InjectOtherServices, self.inject_services.as_str())
            .set(Placeholder::OtherServices, self.services.as_str())
            .set(Placeholder::GetForeignObjects, self.fetch_functions.as_str())
            .set(Placeholder::ForeignFunctionsCall, self.fetch_calls.as_str())
    }
}

/// Expand every `child_of` entry of `object`.
///
/// # Errors
/// `UnresolvedRelation` under [`RelationPolicy::Strict`] when a foreign name
/// matches no object. Permissive mode never fails.
pub fn expand(
    ctx: &GenerationContext<'_>,
    object: &ObjectSpec,
) -> Result<RelationFragments, DomainError> {
    let mut out = RelationFragments::default();

    for foreign_name in &object.child_of {
        let foreign = ctx.find_object(foreign_name);

        if foreign.is_none() {
            if ctx.policy() == RelationPolicy::Strict {
                return Err(DomainError::UnresolvedRelation {
                    object: object.name.clone(),
                    foreign: foreign_name.clone(),
                });
            }
            warn!(
                object = %object.name,
                foreign = %foreign_name,
                "child_of names an undeclared object; select widget skipped"
            );
            out.unresolved.push(foreign_name.clone());
        }

        out.inject_services.push_str(&injected_service(foreign_name));
        out.services.push_str(&bound_service(foreign_name));
        out.fetch_functions.push_str(&fetch_function(foreign_name));
        out.fetch_calls.push_str(&fetch_call(foreign_name));

        if let Some(foreign) = foreign {
            debug!(object = %object.name, foreign = %foreign.name, "foreign select added");
            out.selects.push_str(&foreign_select(foreign));
        }
    }

    Ok(out)
}

pub fn injected_service(foreign_name: &str) -> String {
    format!("'{foreign_name}Service', ")
}

pub fn bound_service(foreign_name: &str) -> String {
    format!("{foreign_name}Service, ")
}

pub fn fetch_call(foreign_name: &str) -> String {
    format!("\t\t\tget{}();\n", capitalize(foreign_name))
}

/// Loads the foreign collection into `vm.<foreign>`; a failed call is
/// logged by the generated code and otherwise ignored.
pub fn fetch_function(foreign_name: &str) -> String {
    let getter = format!("get{}", capitalize(foreign_name));
    format!(
        "\t\tfunction {getter}() {{\n\
         \t\t\t{foreign_name}Service.{getter}().then(\n\
         \t\t\tfunction(response){{\n\
         \t\t\t\tvm.{foreign_name} = response.data.data;\n\
         \t\t\t}},\n\
         \t\t\tfunction(error){{console.error(error)}});\n\
         \t\t}}\n\n"
    )
}

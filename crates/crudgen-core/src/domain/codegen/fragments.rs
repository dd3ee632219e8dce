//! Fragment builders.
//!
//! Each builder turns one piece of metadata into a literal block of
//! generated source. Builders are pure; the module and project assemblers
//! decide which placeholder a fragment lands in.
//!
//! Field-level builders leave `{%object%}` / `{%objects%}` in their output.
//! Those tokens belong to the enclosing object and are resolved by the
//! default-code pass.

use crate::domain::{
    codegen::classifier::{FieldKind, classify, input_type},
    entities::{Field, FieldType, ObjectSpec},
    naming::capitalize,
};

const REQUIRED_ATTR: &str = r#"required="required""#;
const DECIMAL_STEP_ATTR: &str = r#"step="0.01""#;

// ============================================================================
// Edit-view form fields
// ============================================================================

/// Form fragment for `field`, dispatched on its render category.
///
/// Returns `None` for [`FieldKind::Unknown`].
pub fn form_field(field: &Field) -> Option<String> {
    match classify(field) {
        FieldKind::Text => Some(text_field(field)),
        FieldKind::Number => Some(number_field(field)),
        FieldKind::TextArea => Some(textarea_field(field)),
        FieldKind::FileImage => Some(file_image_field(field)),
        FieldKind::Unknown => None,
    }
}

pub fn text_field(field: &Field) -> String {
    let type_attr = format!(r#"type="{}""#, input_type(field));
    let input = attributes(&[required_attr(field), &type_attr]);
    labeled_group(
        field,
        &format!(
            "\t\t<input {input} class=\"form-control\" ng-model=\"vm.{{%object%}}.{}\">\n",
            field.name
        ),
    )
}

/// Numeric input; `float` fields get a decimal step.
pub fn number_field(field: &Field) -> String {
    let step = if field.field_type == FieldType::Float {
        DECIMAL_STEP_ATTR
    } else {
        ""
    };
    let input = attributes(&[required_attr(field), step, r#"type="number""#]);
    labeled_group(
        field,
        &format!(
            "\t\t<input {input} class=\"form-control\" ng-model=\"vm.{{%object%}}.{}\">\n",
            field.name
        ),
    )
}

pub fn textarea_field(field: &Field) -> String {
    let attrs = attributes(&[required_attr(field), r#"class="form-control""#]);
    labeled_group(
        field,
        &format!(
            "\t\t<textarea {attrs} ng-model=\"vm.{{%object%}}.{}\"></textarea>\n",
            field.name
        ),
    )
}

/// Preview plus upload button, shown once the record has an id.
pub fn file_image_field(field: &Field) -> String {
    let name = &field.name;
    format!(
        "\t<div class=\"form-group\" ng-if=\"vm.{{%object%}}.id\">\n\
         \t\t<label for=\"{name}\">Image</label>\n\
         \t\t<div>\n\
         \t\t\t<img ngf-thumbnail=\"file || vm.config.UploadAddress + '/{{%objects%}}/' + vm.{{%object%}}.{name}.name\" width=\"150\">\n\
         \t\t\t<div class=\"btn btn-default\" ngf-select=\"vm.uploadFile($file, '{name}')\" ng-model=\"file\" ngf-pattern=\"'image/*'\" ngf-accept=\"'image/*'\">Select Files</div>\n\
         \t\t</div>\n\
         \t</div>\n\n"
    )
}

fn labeled_group(field: &Field, control: &str) -> String {
    format!(
        "\t<div class=\"form-group\">\n\
         \t\t<label for=\"{}\">{}</label>\n\
         {control}\
         \t</div>\n\n",
        field.name,
        capitalize(&field.name)
    )
}

fn required_attr(field: &Field) -> &'static str {
    if field.required { REQUIRED_ATTR } else { "" }
}

fn attributes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// List-view columns
// ============================================================================

/// Header and body cell for one listed field. Always built together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPair {
    pub header: String,
    pub body: String,
}

pub fn list_column(object: &ObjectSpec, field: &Field) -> ColumnPair {
    ColumnPair {
        header: format!("\t\t\t\t\t<th>{}</th>\n", capitalize(&field.name)),
        body: format!(
            "\t\t\t\t\t<td><span>{{{{{}.{}}}}}</span></td>\n",
            object.name_singular, field.name
        ),
    }
}

/// One pair per `in_list` field, in `structure` order.
pub fn list_columns(object: &ObjectSpec) -> Vec<ColumnPair> {
    object
        .fields_in_list()
        .map(|field| list_column(object, field))
        .collect()
}

// ============================================================================
// Relations
// ============================================================================

/// Select bound to the foreign object's id, fed by `vm.<foreign plural>`.
pub fn foreign_select(foreign: &ObjectSpec) -> String {
    let singular = &foreign.name_singular;
    let plural = &foreign.name;
    format!(
        "\t<div class=\"form-group\">\n\
         \t\t<label for=\"{singular}_id\">{label}</label>\n\
         \t\t<select class=\"form-control\" id=\"{singular}_id\"\n\
         \t\tng-options=\"{singular}.id as {singular}.name for {singular} in vm.{plural}\"\n\
         \t\tng-model=\"vm.{{%object%}}.{singular}_id\" required>\n\
         \t\t\t<option value=\"\">---</option>\n\
         \t\t</select>\n\
         \t</div>\n\n",
        label = capitalize(singular),
    )
}

// ============================================================================
// Project-wide artifacts
// ============================================================================

/// List state (`root.<objects>`) and edit state (`root.<objects>.edit`).
pub fn route_states(object: &ObjectSpec) -> String {
    let plural = &object.name;
    let singular = &object.name_singular;
    format!(
        "\t\t.state('root.{plural}', {{\n\
         \t\t\turl: '/{plural}',\n\
         \t\t\tviews: {{\n\
         \t\t\t\t'main@': {{\n\
         \t\t\t\t\ttemplateUrl: 'app/components/{plural}/views/{plural}.list.html',\n\
         \t\t\t\t\tcontroller: '{plural}Controller as vm'\n\
         \t\t\t\t}}\n\
         \t\t\t}}\n\
         \t\t}})\n\
         \t\t.state('root.{plural}.edit', {{\n\
         \t\t\turl: '/edit/:id',\n\
         \t\t\tviews: {{\n\
         \t\t\t\t'main@': {{\n\
         \t\t\t\t\ttemplateUrl: 'app/components/{plural}/views/{plural}.edit.html',\n\
         \t\t\t\t\tcontroller: '{singular}EditController as vm'\n\
         \t\t\t\t}}\n\
         \t\t\t}}\n\
         \t\t}})\n"
    )
}

pub fn menu_entry(object: &ObjectSpec) -> String {
    format!(
        "\t\t<li role=\"presentation\"><a href=\"#\" ui-sref=\"root.{}\">{}</a></li>\n",
        object.name,
        capitalize(&object.name)
    )
}

/// Services, list controller, edit controller, in that order.
pub fn script_includes(object: &ObjectSpec) -> String {
    let plural = &object.name;
    format!(
        "\t<!-- {label} -->\n\
         \t<script src=\"/app/components/{plural}/{plural}.services.js\"></script>\n\
         \t<script src=\"/app/components/{plural}/{plural}.controller.js\"></script>\n\
         \t<script src=\"/app/components/{plural}/{plural}.edit.controller.js\"></script>\n\n",
        label = capitalize(plural),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cars() -> ObjectSpec {
        ObjectSpec::new("cars", "car")
            .with_field(Field::new("brand", FieldType::Text).required().in_list())
            .with_field(Field::new("notes", FieldType::Textarea))
            .with_field(Field::new("price", FieldType::Float).in_list())
    }

    #[test]
    fn required_marker_follows_field_flag() {
        let required = text_field(&Field::new("brand", FieldType::Text).required());
        let optional = text_field(&Field::new("brand", FieldType::Text));

        assert!(required.contains(REQUIRED_ATTR));
        assert!(!optional.contains("required"));
    }

    #[test]
    fn text_field_binds_object_scoped_model() {
        let out = text_field(&Field::new("brand", FieldType::Text).required());
        assert!(out.contains(r#"<label for="brand">Brand</label>"#));
        assert!(out.contains(
            r#"<input required="required" type="text" class="form-control" ng-model="vm.{%object%}.brand">"#
        ));
    }

    #[test]
    fn float_gets_decimal_step_and_integer_does_not() {
        let float = number_field(&Field::new("price", FieldType::Float));
        let integer = number_field(&Field::new("doors", FieldType::Integer));
        let number = number_field(&Field::new("doors", FieldType::Number));

        assert!(float.contains(r#"<input step="0.01" type="number""#));
        assert!(!integer.contains("step="));
        assert!(!number.contains("step="));
        assert!(integer.contains(r#"<input type="number""#));
    }

    #[test]
    fn textarea_required_marker() {
        let out = textarea_field(&Field::new("notes", FieldType::Textarea).required());
        assert!(out.contains(
            r#"<textarea required="required" class="form-control" ng-model="vm.{%object%}.notes"></textarea>"#
        ));
    }

    #[test]
    fn file_image_leaves_object_tokens_for_later() {
        let out = file_image_field(&Field::new("photo", FieldType::FileImage));
        assert!(out.contains(r#"ng-if="vm.{%object%}.id""#));
        assert!(out.contains("'/{%objects%}/' + vm.{%object%}.photo.name"));
        assert!(out.contains("vm.uploadFile($file, 'photo')"));
    }

    #[test]
    fn unknown_fields_render_nothing() {
        assert!(form_field(&Field::new("vin", FieldType::Unknown)).is_none());
        assert!(form_field(&Field::new("vin", FieldType::Text)).is_some());
    }

    #[test]
    fn list_columns_pair_in_list_fields_in_order() {
        let columns = list_columns(&cars());

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].header, "\t\t\t\t\t<th>Brand</th>\n");
        assert_eq!(
            columns[0].body,
            "\t\t\t\t\t<td><span>{{car.brand}}</span></td>\n"
        );
        assert!(columns[1].header.contains("<th>Price</th>"));
        assert!(columns[1].body.contains("{{car.price}}"));
    }

    #[test]
    fn foreign_select_uses_plural_source_and_singular_label() {
        let owners = ObjectSpec::new("owners", "owner");
        let out = foreign_select(&owners);

        assert!(out.contains("<label for=\"owner_id\">Owner</label>"));
        assert!(out.contains("ng-options=\"owner.id as owner.name for owner in vm.owners\""));
        assert!(out.contains("ng-model=\"vm.{%object%}.owner_id\" required>"));
    }

    #[test]
    fn route_states_pair_list_and_edit() {
        let out = route_states(&cars());

        assert!(out.contains(".state('root.cars', {"));
        assert!(out.contains(".state('root.cars.edit', {"));
        assert!(out.contains("url: '/cars',"));
        assert!(out.contains("url: '/edit/:id',"));
        assert!(out.contains("templateUrl: 'app/components/cars/views/cars.list.html'"));
        assert!(out.contains("controller: 'carsController as vm'"));
        assert!(out.contains("controller: 'carEditController as vm'"));
    }

    #[test]
    fn menu_entry_links_to_list_state() {
        assert_eq!(
            menu_entry(&cars()),
            "\t\t<li role=\"presentation\"><a href=\"#\" ui-sref=\"root.cars\">Cars</a></li>\n"
        );
    }

    #[test]
    fn script_includes_are_in_fixed_order() {
        let out = script_includes(&cars());
        let services = out.find("cars.services.js").unwrap();
        let list = out.find("cars.controller.js").unwrap();
        let edit = out.find("cars.edit.controller.js").unwrap();

        assert!(out.starts_with("\t<!-- Cars -->\n"));
        assert!(services < list && list < edit);
    }
}

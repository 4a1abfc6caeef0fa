//! Java implementation-class generation from validated bundles.

use super::GeneratedSource;
use super::jvm_types::ReturnShape;
use super::naming::{impl_class_name, package_of, qualify, simple_name};
use super::writer::SourceWriter;
use crate::config::GeneratorConfig;
use crate::escape::escape_template;
use crate::model::{BundleDeclaration, MethodDeclaration};
use crate::validator::{MethodKind, ResolvedMethod, ValidatedBundle};
use tracing::debug;

/// Name of the field holding the logging handle.
const LOGGER_FIELD: &str = "logger";

/// Name of the local holding the formatted message.
const RETURN_LOCAL: &str = "returnString";

/// Formatter arity above which arguments are passed as an array.
const MAX_INLINE_FORMAT_ARGS: usize = 2;

/// Renders one Java source unit per validated bundle.
pub struct JavaEmitter<'c> {
    config: &'c GeneratorConfig,
}

impl<'c> JavaEmitter<'c> {
    pub fn new(config: &'c GeneratorConfig) -> Self {
        Self { config }
    }

    /// Simple name of the class generated for a bundle.
    pub fn class_name(&self, bundle: &BundleDeclaration) -> String {
        impl_class_name(simple_name(&bundle.qualified_name), &self.config.impl_suffix)
    }

    /// Qualified name of the class generated for a bundle; this is its output identity.
    pub fn output_name(&self, bundle: &BundleDeclaration) -> String {
        qualify(&bundle.namespace, &self.class_name(bundle))
    }

    /// Render the implementation class for a bundle.
    pub fn emit(&self, bundle: &ValidatedBundle<'_>) -> GeneratedSource {
        let decl = bundle.declaration;
        let class_name = self.class_name(decl);
        let qualified_name = qualify(&decl.namespace, &class_name);

        let mut w = SourceWriter::new();
        self.write_header(&mut w, decl);

        w.line_fmt(format_args!(
            "// @LogBundle(projectCode = \"{}\")",
            escape_template(&decl.project_code)
        ));
        w.line_fmt(format_args!(
            "public class {} implements {}",
            class_name,
            interface_reference(decl)
        ));
        w.block("{", "}", |w| {
            self.write_boilerplate(w, &class_name, &qualified_name);
            for method in &bundle.methods {
                w.blank();
                self.write_method(w, decl, method);
            }
        });

        debug!(
            class = %qualified_name,
            methods = bundle.methods.len(),
            "rendered implementation class"
        );

        GeneratedSource {
            qualified_name,
            contents: w.finish(),
            method_count: bundle.methods.len(),
        }
    }

    fn write_header(&self, w: &mut SourceWriter, decl: &BundleDeclaration) {
        w.line_fmt(format_args!(
            "/** This class is auto generated by {}",
            self.config.generator_name
        ));
        w.line_fmt(format_args!(
            "    and it inherits whatever license is declared at {} */",
            decl.qualified_name
        ));
        w.blank();

        if !decl.namespace.is_empty() {
            w.line_fmt(format_args!("package {};", decl.namespace));
            w.blank();
        }

        for import in self.config.imports() {
            w.line_fmt(format_args!("import {import};"));
        }
        w.blank();
    }

    fn write_boilerplate(&self, w: &mut SourceWriter, class_name: &str, qualified_name: &str) {
        let logger = self.config.logger_simple_name();
        let factory = simple_name(&self.config.logger_factory);

        w.line_fmt(format_args!("private final {logger} {LOGGER_FIELD};"));
        w.blank();

        w.block(
            format!("public {class_name}({logger} {LOGGER_FIELD}) {{"),
            "}",
            |w| {
                w.line_fmt(format_args!("this.{LOGGER_FIELD} = {LOGGER_FIELD};"));
            },
        );
        w.blank();

        w.block(format!("public {class_name}() {{"), "}", |w| {
            w.line_fmt(format_args!(
                "this({factory}.getLogger({qualified_name}.class));"
            ));
        });
        w.blank();

        w.line_fmt(format_args!(
            "public static final {class_name} INSTANCE = new {class_name}();"
        ));
    }

    fn write_method(&self, w: &mut SourceWriter, decl: &BundleDeclaration, method: &ResolvedMethod<'_>) {
        let m = method.declaration;
        match method.kind {
            MethodKind::Message { id, template } => {
                w.line_fmt(format_args!(
                    "// @Message(id = {id}, value = \"{}\")",
                    escape_template(template)
                ));
                w.line_fmt(format_args!(
                    "public {} {}({})",
                    m.return_type.trim(),
                    m.name,
                    parameter_list(m)
                ));
                let literal = message_literal(&decl.project_code, id, template);
                w.block("{", "}", |w| {
                    self.write_message_body(w, m, &literal);
                });
            }
            MethodKind::LogMessage {
                id,
                template,
                level,
            } => {
                w.line_fmt(format_args!(
                    "// @LogMessage(id = {id}, value = \"{}\", level = {level})",
                    escape_template(template)
                ));
                w.line_fmt(format_args!("public void {}({})", m.name, parameter_list(m)));
                let literal = message_literal(&decl.project_code, id, template);
                w.block("{", "}", |w| {
                    if m.has_parameters() {
                        w.line_fmt(format_args!(
                            "{LOGGER_FIELD}.{}(\"{literal}\", {});",
                            level.method_name(),
                            argument_list(m)
                        ));
                    } else {
                        w.line_fmt(format_args!(
                            "{LOGGER_FIELD}.{}(\"{literal}\");",
                            level.method_name()
                        ));
                    }
                });
            }
            MethodKind::GetLogger => {
                w.line("// @GetLogger");
                w.line_fmt(format_args!(
                    "public {} {}() {{ return {LOGGER_FIELD}; }}",
                    self.config.logger_simple_name(),
                    m.name
                ));
            }
        }
    }

    fn write_message_body(&self, w: &mut SourceWriter, m: &MethodDeclaration, literal: &str) {
        if m.has_parameters() {
            let tuple = simple_name(&self.config.formatting_tuple);
            let formatter = simple_name(&self.config.formatter);
            if m.parameters.len() > MAX_INLINE_FORMAT_ARGS {
                w.line_fmt(format_args!(
                    "{tuple} tuple = {formatter}.arrayFormat(\"{literal}\", new Object[] {{{}}});",
                    argument_list(m)
                ));
            } else {
                w.line_fmt(format_args!(
                    "{tuple} tuple = {formatter}.format(\"{literal}\", {});",
                    argument_list(m)
                ));
            }
            w.line_fmt(format_args!("String {RETURN_LOCAL} = tuple.getMessage();"));
        } else {
            w.line_fmt(format_args!("String {RETURN_LOCAL} = \"{literal}\";"));
        }

        match ReturnShape::of(&m.return_type) {
            ReturnShape::Text => {
                w.line_fmt(format_args!("return {RETURN_LOCAL};"));
            }
            ReturnShape::Constructed(ty) => {
                w.line_fmt(format_args!("return new {ty}({RETURN_LOCAL});"));
            }
        }
    }
}

/// The escaped literal `<projectCode><id> <template>`.
fn message_literal(project_code: &str, id: i32, template: &str) -> String {
    escape_template(&format!("{project_code}{id} {template}"))
}

/// Declared parameters as `Type name, Type name`.
fn parameter_list(m: &MethodDeclaration) -> String {
    m.parameters
        .iter()
        .map(|p| format!("{} {}", p.ty.trim(), p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parameter names in declaration order, as call-site arguments.
fn argument_list(m: &MethodDeclaration) -> String {
    m.parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// How the generated class names its interface in the `implements` clause.
fn interface_reference(decl: &BundleDeclaration) -> &str {
    if package_of(&decl.qualified_name) == decl.namespace {
        simple_name(&decl.qualified_name)
    } else {
        &decl.qualified_name
    }
}

//! Emission of the runtime function for a host method.

use jsio_core::{ClassEntry, GenResult, MethodEntry};
use tracing::{debug, debug_span};

use crate::context::FragmentContext;
use crate::generator::Direction;
use crate::writer::CodeWriter;

/// Write a runtime function object invoking `method` of `owner`.
///
/// Emits a bare method reference when no value crossing the boundary needs
/// converting, otherwise a linkage function converting each argument.
/// `ctx.parameter_name()` names the receiver for instance methods.
pub(crate) fn write_function_for_method(
    ctx: &FragmentContext<'_>,
    owner: &ClassEntry,
    method: &MethodEntry,
    out: &mut CodeWriter,
) -> GenResult<()> {
    let _span = debug_span!("write_function", owner = %owner.name, method = %method.name).entered();

    if is_identity_function(ctx, method)? {
        debug!("method usable as-is");
        write_method_reference(owner, method, out);
        Ok(())
    } else {
        debug!("writing linkage function");
        write_linkage_function(ctx, owner, method, out)
    }
}

/// Check if `method` can be exported without a linkage function.
///
/// Requires a static method whose return and parameter types all convert by
/// identity. The return type must resolve even for instance methods.
fn is_identity_function(ctx: &FragmentContext<'_>, method: &MethodEntry) -> GenResult<bool> {
    let _span = debug_span!("identity_test", method = %method.name).entered();
    let types = ctx.types();
    let oracle = ctx.oracle();

    let mut identity = method.is_static();
    identity &= oracle
        .find_fragment_generator(types, &method.return_type)?
        .is_identity();

    for param in &method.params {
        if !identity {
            break;
        }
        identity &= oracle
            .find_fragment_generator(types, &param.param_type)?
            .is_identity();
    }

    debug!(identity, "identity test");
    Ok(identity)
}

/// `@Owner::name(SIGNATURE)`
fn write_method_reference(owner: &ClassEntry, method: &MethodEntry, out: &mut CodeWriter) {
    out.print("@");
    out.print(&owner.qualified_name());
    out.print("::");
    out.print(&method.name);
    out.print("(");
    out.print(&method.jni_param_signature());
    out.print(")");
}

fn write_linkage_function(
    ctx: &FragmentContext<'_>,
    owner: &ClassEntry,
    method: &MethodEntry,
    out: &mut CodeWriter,
) -> GenResult<()> {
    let prefix = &ctx.config().conventions.linkage_param_prefix;
    let args: Vec<String> = (0..method.params.len())
        .map(|i| format!("{prefix}{i}"))
        .collect();

    out.print("function(");
    out.print(&args.join(", "));
    out.println(") {");
    out.indent();

    out.print("return ");
    if !method.is_static() {
        out.print(ctx.parameter_name());
        out.print(".");
    }
    write_method_reference(owner, method, out);
    out.println("(");

    // arguments each on their own line
    out.indent();
    out.indent();
    for (i, (param, arg)) in method.params.iter().zip(&args).enumerate() {
        let sub = ctx.sub_context(&param.param_type, arg.as_str())?;
        sub.emit(Direction::FromJs, out)?;
        if i + 1 < args.len() {
            out.println(", ");
        }
    }
    out.outdent();
    out.outdent();
    out.println(");");
    out.outdent();
    out.print("}");
    Ok(())
}

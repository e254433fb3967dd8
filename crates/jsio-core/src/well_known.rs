//! Names of the runtime types the generator depends on.
//!
//! These are the defaults used by `WellKnownTypes` in `jsio-codegen` and the
//! types pre-registered by `TypeRegistry::with_runtime_types`.

/// Root of the host class hierarchy.
pub const OBJECT: &str = "java.lang.Object";

/// Host string type, passed across the boundary unchanged.
pub const STRING: &str = "java.lang.String";

/// Opaque handle to a runtime object.
pub const JAVA_SCRIPT_OBJECT: &str = "com.google.gwt.core.client.JavaScriptObject";

/// Marker interface for callable types exported to the runtime.
pub const JS_FUNCTION: &str = "com.google.gwt.jsio.client.JSFunction";

/// Interface of values that pull host objects out of runtime collections.
pub const EXTRACTOR: &str = "com.google.gwt.jsio.client.impl.Extractor";

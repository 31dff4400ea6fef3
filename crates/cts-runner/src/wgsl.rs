//! WGSL source rendering for expression programs.
//!
//! The rendered shader evaluates the expression once per invocation and
//! writes each result to an output slot the harness reads back. The source
//! is what makes the dispatch meaningful to a real device executor; the
//! reference executor ignores it and evaluates the operation directly.

use cts_core::ScalarType;

use crate::executor::{BuiltinOp, InputSource};

fn scalar_wgsl(ty: ScalarType) -> &'static str {
    match ty {
        ScalarType::F32 => "f32",
        ScalarType::I32 => "i32",
        ScalarType::U32 => "u32",
        ScalarType::Bool => "bool",
    }
}

fn value_type(ty: ScalarType, vectorize: Option<u32>) -> String {
    match vectorize {
        Some(w) => format!("vec{w}<{}>", scalar_wgsl(ty)),
        None => scalar_wgsl(ty).to_owned(),
    }
}

fn expression(op: BuiltinOp, operands: &[String]) -> String {
    if op.is_operator() {
        format!("-({})", operands[0])
    } else {
        format!("{}({})", op.name(), operands.join(", "))
    }
}

/// Render a compute shader evaluating `op` once per invocation.
pub fn render_expression_shader(
    op: BuiltinOp,
    input_source: InputSource,
    vectorize: Option<u32>,
) -> String {
    let out_ty = value_type(ScalarType::F32, vectorize);
    let mut src = String::new();

    let operands: Vec<String> = match input_source {
        // Constant delivery: the harness splices per-batch literals over
        // these placeholders at dispatch time.
        InputSource::Const => (0..op.arity()).map(|i| format!("INPUT{i}")).collect(),
        InputSource::Uniform | InputSource::StorageRead | InputSource::StorageReadWrite => {
            for (i, &ty) in op.input_types().iter().enumerate() {
                let decl = match input_source {
                    InputSource::Uniform => "var<uniform>",
                    InputSource::StorageRead => "var<storage, read>",
                    _ => "var<storage, read_write>",
                };
                let in_ty = value_type(ty, vectorize);
                src.push_str(&format!(
                    "@group(0) @binding({i}) {decl} input{i} : array<{in_ty}, 256>;\n"
                ));
            }
            (0..op.arity())
                .map(|i| format!("input{i}[gid.x]"))
                .collect()
        }
    };

    let out_binding = op.arity();
    src.push_str(&format!(
        "@group(0) @binding({out_binding}) var<storage, read_write> outputs : array<{out_ty}, 256>;\n"
    ));
    src.push_str("@compute @workgroup_size(1)\n");
    src.push_str("fn main(@builtin(global_invocation_id) gid : vec3<u32>) {\n");
    src.push_str(&format!(
        "  outputs[gid.x] = {};\n",
        expression(op, &operands)
    ));
    src.push_str("}\n");
    src
}

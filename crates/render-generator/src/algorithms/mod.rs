//! Built-in algorithms and the default generator set.
//!
//! Scalar algorithms read constraint metadata off the attribute. When the
//! attribute declares an `enum`, every built-in picks one of its members
//! instead of synthesizing a value.

pub mod numeric;
pub mod pattern;
pub mod string;
pub mod timestamp;
pub mod uuid;

use crate::generator::{AlgorithmResult, GenerationContext};
use crate::matcher::Matcher;
use crate::registry::Registry;
use rand::seq::SliceRandom;
use rand::Rng;
use render_core::{RenderValue, TypeTag};

/// Register the default generators, weakest first.
///
/// Anything registered afterwards for the same type and name wins.
pub fn register_defaults(registry: &mut Registry) {
    registry.create(TypeTag::String, Matcher::Any, string_algorithm);
    registry.create(TypeTag::Integer, Matcher::Any, integer_algorithm);
    registry.create(TypeTag::Float, Matcher::Any, float_algorithm);
    registry.create(TypeTag::Boolean, Matcher::Any, boolean_algorithm);
    registry.create(TypeTag::Uuid, Matcher::Any, uuid_algorithm);
    registry.create(TypeTag::DateTime, Matcher::Any, date_time_algorithm);
    registry.create(TypeTag::Enum, Matcher::Any, enum_algorithm);
    registry.create(TypeTag::Null, Matcher::Any, |_ctx: &mut GenerationContext<'_>| {
        Ok(RenderValue::Null)
    });
}

/// Built-in algorithm for `target_type`, if there is one.
pub fn builtin_for(
    target_type: &TypeTag,
) -> Option<fn(&mut GenerationContext<'_>) -> AlgorithmResult> {
    let algorithm: fn(&mut GenerationContext<'_>) -> AlgorithmResult = match target_type {
        TypeTag::String => string_algorithm,
        TypeTag::Integer => integer_algorithm,
        TypeTag::Float => float_algorithm,
        TypeTag::Boolean => boolean_algorithm,
        TypeTag::Uuid => uuid_algorithm,
        TypeTag::DateTime => date_time_algorithm,
        TypeTag::Enum => enum_algorithm,
        TypeTag::Null | TypeTag::Custom(_) => return None,
    };
    Some(algorithm)
}

/// Random member of the attribute's enum, if it declares one.
fn pick_enum(ctx: &mut GenerationContext<'_>) -> Option<RenderValue> {
    ctx.attribute.enum_values().choose(&mut *ctx.rng).cloned()
}

pub fn string_algorithm(ctx: &mut GenerationContext<'_>) -> AlgorithmResult {
    if let Some(value) = pick_enum(ctx) {
        return Ok(value);
    }
    Ok(RenderValue::String(string::generate_string(
        &mut *ctx.rng,
        ctx.attribute.constraints(),
    )))
}

pub fn integer_algorithm(ctx: &mut GenerationContext<'_>) -> AlgorithmResult {
    if let Some(value) = pick_enum(ctx) {
        return Ok(value);
    }
    numeric::generate_integer(&mut *ctx.rng, ctx.attribute).map(RenderValue::Int64)
}

pub fn float_algorithm(ctx: &mut GenerationContext<'_>) -> AlgorithmResult {
    if let Some(value) = pick_enum(ctx) {
        return Ok(value);
    }
    numeric::generate_float(&mut *ctx.rng, ctx.attribute).map(RenderValue::Float64)
}

pub fn boolean_algorithm(ctx: &mut GenerationContext<'_>) -> AlgorithmResult {
    if let Some(value) = pick_enum(ctx) {
        return Ok(value);
    }
    Ok(RenderValue::Bool(ctx.rng.gen_bool(0.5)))
}

pub fn uuid_algorithm(ctx: &mut GenerationContext<'_>) -> AlgorithmResult {
    if let Some(value) = pick_enum(ctx) {
        return Ok(value);
    }
    Ok(RenderValue::Uuid(uuid::generate_uuid_v4(&mut *ctx.rng)))
}

pub fn date_time_algorithm(ctx: &mut GenerationContext<'_>) -> AlgorithmResult {
    if let Some(value) = pick_enum(ctx) {
        return Ok(value);
    }
    Ok(RenderValue::DateTime(timestamp::generate_default_timestamp(
        &mut *ctx.rng,
    )))
}

/// Enum-typed attributes: a declared member, or null when none is declared.
pub fn enum_algorithm(ctx: &mut GenerationContext<'_>) -> AlgorithmResult {
    Ok(pick_enum(ctx).unwrap_or(RenderValue::Null))
}

//! Demodernizer throughput benchmark.
//! Run: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glsl_demod::{demodernize, ShaderStage};

const MRT_DEPTH_FRAGMENT: &str = "\
#version 300 es
precision highp float;

in vec2 v_uv;
in vec3 v_normal;
in float v_depth;

uniform sampler2D u_albedo;
uniform samplerCube u_environment;

layout (location = 0) vec4 out_FragData_0;
layout (location = 1) vec4 out_FragData_1;

void main() {
    vec4 albedo = texture(u_albedo, v_uv);
    vec4 env = czm_textureCube(u_environment, reflect(vec3(0.0, 0.0, -1.0), v_normal));
    out_FragData_0 = albedo * env;
    out_FragData_1 = vec4(v_normal * 0.5 + 0.5, 1.0);
    gl_FragDepth = v_depth;
}
";

fn bench_demodernize(c: &mut Criterion) {
    let mut group = c.benchmark_group("demodernize");
    group.sample_size(50);

    group.bench_function("mrt_depth_fragment", |b| {
        b.iter(|| black_box(demodernize(black_box(MRT_DEPTH_FRAGMENT), ShaderStage::Fragment)))
    });

    group.finish();
}

criterion_group!(benches, bench_demodernize);
criterion_main!(benches);

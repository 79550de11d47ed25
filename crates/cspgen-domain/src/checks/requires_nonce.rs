use super::ValidationContext;
use super::utils::has_nonce;

pub fn run(ctx: &ValidationContext<'_>, out: &mut Vec<String>) {
    if has_nonce(ctx.directives) {
        return;
    }
    for service in ctx.services.iter().filter(|s| s.requires_nonce) {
        out.push(format!(
            "Service '{}' expects a nonce on its inline scripts; enable nonce generation",
            service.id
        ));
    }
}

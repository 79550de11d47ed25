use super::ValidationContext;
use super::utils::grants_dynamic_scripts;

pub fn run(ctx: &ValidationContext<'_>, out: &mut Vec<String>) {
    if grants_dynamic_scripts(ctx.directives) {
        return;
    }
    for service in ctx.services.iter().filter(|s| s.requires_dynamic) {
        out.push(format!(
            "Service '{}' injects scripts dynamically; add 'strict-dynamic' or a nonce to script-src",
            service.id
        ));
    }
}

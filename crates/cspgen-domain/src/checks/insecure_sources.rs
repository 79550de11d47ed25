use super::ValidationContext;

pub fn run(ctx: &ValidationContext<'_>, out: &mut Vec<String>) {
    for (directive, values) in ctx.directives.iter() {
        for value in values.iter().filter(|v| v.starts_with("http://")) {
            out.push(format!("{directive} loads {value} over plain HTTP"));
        }
    }
}

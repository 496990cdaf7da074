use std::path::PathBuf;
use std::sync::Arc;

use trail_app::{ChmodService, DiagnosticInfra, EnvironmentInfra, ToolRegistry};
use trail_domain::{
    Chmod, Environment, NamedTool, ToolCallContext, ToolCallFull, ToolDefinition, ToolOutput,
};
use trail_infra::TrailInfra;
use trail_services::TrailServices;

use crate::API;

pub struct TrailAPI<S, F> {
    registry: ToolRegistry<S>,
    infra: Arc<F>,
}

impl<S: ChmodService + DiagnosticInfra, F> TrailAPI<S, F> {
    pub fn new(services: Arc<S>, infra: Arc<F>) -> Self {
        Self { registry: ToolRegistry::new(services), infra }
    }
}

impl TrailAPI<TrailServices<TrailInfra>, TrailInfra> {
    pub fn init(cwd: PathBuf) -> Self {
        let infra = Arc::new(TrailInfra::new(cwd));
        let services = Arc::new(TrailServices::new(infra.clone()));
        TrailAPI::new(services, infra)
    }
}

#[async_trait::async_trait]
impl<S: ChmodService + DiagnosticInfra + 'static, F: EnvironmentInfra + 'static> API
    for TrailAPI<S, F>
{
    fn tools(&self) -> Vec<ToolDefinition> {
        self.registry.list()
    }

    async fn call(&self, call: ToolCallFull, context: ToolCallContext) -> ToolOutput {
        self.registry.call(call, &context).await
    }

    async fn chmod(&self, path: String, mode: String, context: ToolCallContext) -> ToolOutput {
        let call = ToolCallFull::new(Chmod::tool_name()).arguments(serde_json::json!({
            "path": path,
            "mode": mode,
        }));
        self.registry.call(call, &context).await
    }

    fn environment(&self) -> Environment {
        self.infra.get_environment()
    }
}

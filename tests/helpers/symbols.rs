//! Symbol and connector fixtures.

use flowmodel::central::{ConnectorIndex, FunctionKind, FunctionResult};
use flowmodel::semantic::{
    ClassSymbol, ModuleId, Qualifier, TypeSymbol, VariableScope, VariableSymbol,
};

pub fn http_module() -> ModuleId {
    ModuleId::new("ballerina", "http", "2.10.0")
}

pub fn redis_module() -> ModuleId {
    ModuleId::new("ballerinax", "redis", "3.0.0")
}

pub fn mysql_module() -> ModuleId {
    ModuleId::new("ballerinax", "mysql", "1.11.0")
}

/// A variable of type `<module>:Client`.
pub fn client_variable(name: &str, module: ModuleId, scope: VariableScope) -> VariableSymbol {
    let class = ClassSymbol::new("Client")
        .with_qualifier(Qualifier::Client)
        .with_module(module.clone());
    let ty = TypeSymbol::reference("Client", Some(module), TypeSymbol::Class(class));
    VariableSymbol::new(name, ty, scope)
}

/// A variable whose class is not a client class.
pub fn plain_object_variable(name: &str) -> VariableSymbol {
    let class = ClassSymbol::new("Person").with_module(http_module());
    let ty = TypeSymbol::reference("Person", Some(http_module()), TypeSymbol::Class(class));
    VariableSymbol::new(name, ty, VariableScope::Module)
}

fn function(id: i64, name: &str, kind: FunctionKind, module: &ModuleId) -> FunctionResult {
    FunctionResult {
        function_id: id,
        name: name.into(),
        description: format!("{name} description"),
        kind,
        org: module.org.clone(),
        package_name: module.name.clone(),
        version: module.version.clone(),
        return_type: None,
    }
}

/// http with `get` and `post`, redis with `set`, mysql without actions.
pub fn connector_index() -> ConnectorIndex {
    let mut index = ConnectorIndex::new();

    let http = http_module();
    index.insert_connector(
        function(1, "init", FunctionKind::Connector, &http),
        vec![
            function(2, "get", FunctionKind::RemoteFunction, &http),
            function(3, "post", FunctionKind::RemoteFunction, &http),
        ],
    );

    let redis = redis_module();
    index.insert_connector(
        function(10, "init", FunctionKind::Connector, &redis),
        vec![function(11, "set", FunctionKind::RemoteFunction, &redis)],
    );

    let mysql = mysql_module();
    index.insert_connector(function(20, "init", FunctionKind::Connector, &mysql), Vec::new());
    index
}

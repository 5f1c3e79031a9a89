//! Symbol and type model reported by the frontend.
//!
//! These mirror the parts of the compiler's symbol table the diagram layer
//! looks at. Narrowing goes through `as_*` capability queries rather than
//! downcasts: an absent capability is an ordinary `None`.

use smol_str::SmolStr;
use text_size::TextRange;

/// Identity of a module: organization, module name and version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    pub org: SmolStr,
    pub name: SmolStr,
    pub version: SmolStr,
}

impl ModuleId {
    pub fn new(org: impl Into<SmolStr>, name: impl Into<SmolStr>, version: impl Into<SmolStr>) -> Self {
        Self {
            org: org.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Last segment of a dotted module name (`ballerinax.redis` → `redis`),
    /// used as the source-level prefix.
    pub fn prefix(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(self.name.as_str())
    }
}

/// Qualifiers a class or function can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Public,
    Isolated,
    Readonly,
    Distinct,
    Client,
    Service,
    Final,
    Configurable,
    Remote,
    Resource,
}

/// A class type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSymbol {
    pub name: SmolStr,
    pub qualifiers: Vec<Qualifier>,
    pub module: Option<ModuleId>,
}

impl ClassSymbol {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            qualifiers: Vec::new(),
            module: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    pub fn with_module(mut self, module: ModuleId) -> Self {
        self.module = Some(module);
        self
    }

    pub fn has_qualifier(&self, qualifier: Qualifier) -> bool {
        self.qualifiers.contains(&qualifier)
    }

    /// Client classes are remote/service connection endpoints.
    pub fn is_client(&self) -> bool {
        self.has_qualifier(Qualifier::Client)
    }
}

/// A named reference to another type (`http:Client`, `Person`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub name: SmolStr,
    pub module: Option<ModuleId>,
    pub referred: Box<TypeSymbol>,
}

/// Type descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSymbol {
    Nil,
    Never,
    Boolean,
    Int,
    Float,
    Decimal,
    String,
    Json,
    Any,
    Error,
    Union(Vec<TypeSymbol>),
    Reference(TypeReference),
    Class(ClassSymbol),
}

impl TypeSymbol {
    /// Reference `referred` through `name`, optionally qualified by a module.
    pub fn reference(name: impl Into<SmolStr>, module: Option<ModuleId>, referred: TypeSymbol) -> Self {
        Self::Reference(TypeReference {
            name: name.into(),
            module,
            referred: Box::new(referred),
        })
    }

    pub fn as_type_reference(&self) -> Option<&TypeReference> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassSymbol> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Whether every value of this type is `()`.
    pub fn is_subtype_of_nil(&self) -> bool {
        match self {
            Self::Nil | Self::Never => true,
            Self::Union(members) => members.iter().all(TypeSymbol::is_subtype_of_nil),
            Self::Reference(reference) => reference.referred.is_subtype_of_nil(),
            Self::Boolean
            | Self::Int
            | Self::Float
            | Self::Decimal
            | Self::String
            | Self::Json
            | Self::Any
            | Self::Error
            | Self::Class(_) => false,
        }
    }

    /// Source-level spelling of the type.
    pub fn signature(&self) -> String {
        match self {
            Self::Nil => "()".to_string(),
            Self::Never => "never".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Int => "int".to_string(),
            Self::Float => "float".to_string(),
            Self::Decimal => "decimal".to_string(),
            Self::String => "string".to_string(),
            Self::Json => "json".to_string(),
            Self::Any => "any".to_string(),
            Self::Error => "error".to_string(),
            Self::Union(members) => members
                .iter()
                .map(TypeSymbol::signature)
                .collect::<Vec<_>>()
                .join("|"),
            Self::Reference(TypeReference { name, module, .. }) => qualified(module.as_ref(), name),
            Self::Class(ClassSymbol { name, module, .. }) => qualified(module.as_ref(), name),
        }
    }
}

fn qualified(module: Option<&ModuleId>, name: &str) -> String {
    match module {
        Some(module) => format!("{}:{}", module.prefix(), name),
        None => name.to_string(),
    }
}

/// Where a variable is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableScope {
    Local,
    Module,
    Configurable,
    /// A field of the enclosing object or service
    Object,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSymbol {
    pub name: SmolStr,
    pub type_descriptor: TypeSymbol,
    pub scope: VariableScope,
    pub module: Option<ModuleId>,
    pub location: Option<TextRange>,
}

impl VariableSymbol {
    pub fn new(name: impl Into<SmolStr>, type_descriptor: TypeSymbol, scope: VariableScope) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
            scope,
            module: None,
            location: None,
        }
    }

    pub fn with_module(mut self, module: ModuleId) -> Self {
        self.module = Some(module);
        self
    }

    pub fn with_location(mut self, location: TextRange) -> Self {
        self.location = Some(location);
        self
    }

    /// The client class behind this variable's declared type, if any.
    ///
    /// Only `T` where `T` is a reference to a client-qualified class counts;
    /// unions and optional clients do not.
    pub fn client_class(&self) -> Option<(&TypeReference, &ClassSymbol)> {
        let reference = self.type_descriptor.as_type_reference()?;
        let class = reference.referred.as_class()?;
        class.is_client().then_some((reference, class))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSymbol {
    pub name: SmolStr,
    /// `None` when the signature declares no return type
    pub return_type: Option<TypeSymbol>,
    pub qualifiers: Vec<Qualifier>,
    pub module: Option<ModuleId>,
    pub location: Option<TextRange>,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<SmolStr>, return_type: Option<TypeSymbol>) -> Self {
        Self {
            name: name.into(),
            return_type,
            qualifiers: Vec::new(),
            module: None,
            location: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    pub fn with_module(mut self, module: ModuleId) -> Self {
        self.module = Some(module);
        self
    }

    pub fn with_location(mut self, location: TextRange) -> Self {
        self.location = Some(location);
        self
    }
}

/// Anything a name can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Variable(VariableSymbol),
    Function(FunctionSymbol),
    Class(ClassSymbol),
    Module(ModuleId),
}

impl Symbol {
    pub fn as_variable(&self) -> Option<&VariableSymbol> {
        match self {
            Self::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionSymbol> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Variable(variable) => Some(variable.name.as_str()),
            Self::Function(function) => Some(function.name.as_str()),
            Self::Class(class) => Some(class.name.as_str()),
            Self::Module(module) => Some(module.prefix()),
        }
    }

    pub fn module(&self) -> Option<&ModuleId> {
        match self {
            Self::Variable(variable) => variable.module.as_ref(),
            Self::Function(function) => function.module.as_ref(),
            Self::Class(class) => class.module.as_ref(),
            Self::Module(module) => Some(module),
        }
    }

    pub fn location(&self) -> Option<TextRange> {
        match self {
            Self::Variable(variable) => variable.location,
            Self::Function(function) => function.location,
            Self::Class(_) | Self::Module(_) => None,
        }
    }
}

impl From<VariableSymbol> for Symbol {
    fn from(symbol: VariableSymbol) -> Self {
        Self::Variable(symbol)
    }
}

impl From<FunctionSymbol> for Symbol {
    fn from(symbol: FunctionSymbol) -> Self {
        Self::Function(symbol)
    }
}

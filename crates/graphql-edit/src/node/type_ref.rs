use crate::NodeKind;

/// A GraphQL
/// [type reference](https://spec.graphql.org/October2021/#sec-Type-References):
/// a finite chain of `List`/`NonNull` wrappers terminating in exactly
/// one named type.
///
/// Structural invariant: `NonNull` never directly wraps another
/// `NonNull` (the grammar has no `Type!!`). The [`TypeRef::non_null`]
/// constructor and [`TypeRef::set_non_null`] both preserve this.
///
/// All rewriting operations mutate the node in place through
/// `&mut self` — wrapping turns the node itself into the wrapper and
/// unwrapping turns it into its former inner type — so every path
/// elsewhere in the tree that reaches this node observes the rewrite
/// without being updated itself.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(String),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    /// A bare named type reference (e.g. `String`).
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps `inner` in a list layer (e.g. `[String]`).
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps `inner` in a non-null layer (e.g. `String!`).
    ///
    /// If `inner` is already non-null at its outermost layer, it is
    /// returned unchanged: the grammar has no double non-null.
    pub fn non_null(inner: TypeRef) -> Self {
        if matches!(inner, Self::NonNull(_)) {
            inner
        } else {
            Self::NonNull(Box::new(inner))
        }
    }

    /// The `kind` tag of the outermost layer.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::List(_) => NodeKind::ListType,
            Self::Named(_) => NodeKind::NamedType,
            Self::NonNull(_) => NodeKind::NonNullType,
        }
    }

    /// Recursively unwraps every `List`/`NonNull` layer and returns
    /// the terminal named type reference.
    ///
    /// Always terminates: the chain is finite and ends in a named
    /// type by invariant.
    pub fn innermost_named(&self) -> &TypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_named(),
            named @ Self::Named(_) => named,
        }
    }

    /// The identifier of the innermost named type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.type_name(),
            Self::Named(name) => name.as_str(),
        }
    }

    /// Rewrites the innermost named type's identifier in place,
    /// preserving every wrapper layer.
    pub fn set_type_name(&mut self, name: impl Into<String>) -> &mut Self {
        *self.innermost_name_mut() = name.into();
        self
    }

    /// Atomically replaces the entire reference — wrappers and name —
    /// with `shape`, in place.
    pub fn set_type(&mut self, shape: TypeRef) -> &mut Self {
        *self = shape;
        self
    }

    /// Indicates whether this reference is non-null.
    ///
    /// With `deep == false`, tests the outermost layer only. With
    /// `deep == true`, walks outer-to-inner and answers whether *any*
    /// layer on the way to the named type is non-null (so `[String!]`
    /// is deeply non-null while `[String]` is not).
    pub fn is_non_null(&self, deep: bool) -> bool {
        match self {
            Self::NonNull(_) => true,
            Self::Named(_) => false,
            Self::List(inner) => deep && inner.is_non_null(true),
        }
    }

    /// Indicates whether this reference is a list.
    ///
    /// With `deep == false`, tests the outermost layer only. With
    /// `deep == true`, walks outer-to-inner and answers whether *any*
    /// layer on the way to the named type is a list (so `[String]!`
    /// is deeply a list while `String!` is not).
    pub fn is_list(&self, deep: bool) -> bool {
        match self {
            Self::List(_) => true,
            Self::Named(_) => false,
            Self::NonNull(inner) => deep && inner.is_list(true),
        }
    }

    /// Adds or removes the outermost non-null layer in place.
    ///
    /// With `value == true`, the node becomes a non-null wrapper
    /// around its previous content (no-op when already non-null).
    /// With `value == false`, a non-null node becomes its former
    /// inner type (no-op otherwise).
    pub fn set_non_null(&mut self, value: bool) -> &mut Self {
        if value && !matches!(self, Self::NonNull(_)) {
            let inner = std::mem::replace(self, Self::Named(String::new()));
            *self = Self::NonNull(Box::new(inner));
        } else if !value && matches!(self, Self::NonNull(_)) {
            if let Self::NonNull(inner) = std::mem::replace(self, Self::Named(String::new())) {
                *self = *inner;
            }
        }
        self
    }

    /// Adds or removes the outermost list layer in place, symmetric
    /// to [`TypeRef::set_non_null`].
    pub fn set_list(&mut self, value: bool) -> &mut Self {
        if value && !matches!(self, Self::List(_)) {
            let inner = std::mem::replace(self, Self::Named(String::new()));
            *self = Self::List(Box::new(inner));
        } else if !value && matches!(self, Self::List(_)) {
            if let Self::List(inner) = std::mem::replace(self, Self::Named(String::new())) {
                *self = *inner;
            }
        }
        self
    }

    fn innermost_name_mut(&mut self) -> &mut String {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name_mut(),
            Self::Named(name) => name,
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

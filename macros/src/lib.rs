use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a canonical color record from a struct with exactly three
/// component fields. The generated record gets an optional `alpha` field, a
/// set of derives and the constructors shared by every record.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attrs = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attrs);

    if let syn::Fields::Named(ref mut named) = input.fields {
        let alpha = syn::Field::parse_named.parse2(quote! {
            /// The alpha component of the color. `None` when the alpha was
            /// never specified, which is treated as fully opaque.
            pub alpha: ::core::option::Option<crate::color::Component>
        });
        match alpha {
            Ok(alpha) => named.named.push(alpha),
            Err(err) => return err.to_compile_error().into(),
        }
    } else {
        return quote! {
            compile_error!("Models must use named fields.")
        }
        .into();
    }

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new record with the alpha component unset.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha: None,
                }
            }

            /// Return the record with its alpha component replaced.
            pub fn with_alpha(
                mut self,
                alpha: impl Into<::core::option::Option<crate::color::Component>>,
            ) -> Self {
                self.alpha = alpha.into();
                self
            }

            /// Return the alpha component, with an unset alpha reported as
            /// fully opaque.
            pub fn alpha_or_opaque(&self) -> crate::color::Component {
                self.alpha.unwrap_or(1.0)
            }

            /// Convert this record into generic components, dropping the alpha.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }

            /// Create a record from generic components and an alpha.
            pub fn from_components(
                components: crate::color::Components,
                alpha: ::core::option::Option<crate::color::Component>,
            ) -> Self {
                Self {
                    #field1: components.0,
                    #field2: components.1,
                    #field3: components.2,
                    alpha,
                }
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}

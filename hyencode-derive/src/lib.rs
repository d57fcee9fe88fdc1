use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Index, parse_macro_input, parse_quote, spanned::Spanned};

/// Returns `true` if the field carries `#[encode(skip)]`.
fn is_skipped(field: &syn::Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("encode")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported encode attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn field_writes(fields: &Fields) -> syn::Result<Vec<TokenStream2>> {
    let mut writes = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }

        // Named fields keep their name, tuple fields are named by position
        let (name, access) = match &field.ident {
            Some(ident) => (ident.to_string(), quote!(#ident)),
            None => {
                let index = Index::from(index);
                (index.index.to_string(), quote!(#index))
            }
        };

        writes.push(quote! {
            ::hyencode::Encoder::encode_field(encoder, #name, &self.#access)?;
        });
    }
    Ok(writes)
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Encode` can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Encode` can only be derived for structs",
            ));
        }
    };
    let writes = field_writes(fields)?;

    // Every type parameter must itself be encodable
    let type_params: Vec<_> = input.generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = input.generics.make_where_clause();
    for ident in type_params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::hyencode::Encode));
    }

    let name = &input.ident;
    let encoder_ty = format_ident!("__E");
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::hyencode::EncodeObject for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn encode_fields<#encoder_ty: ::hyencode::Encoder>(
                &self,
                encoder: &mut #encoder_ty,
            ) -> ::hyencode::EncodeResult<()> {
                #(#writes)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::hyencode::Encode for #name #ty_generics #where_clause {
            const SHAPE: ::hyencode::Shape = ::hyencode::Shape::Object;

            #[inline]
            fn encode<#encoder_ty: ::hyencode::Encoder>(
                &self,
                encoder: &mut #encoder_ty,
            ) -> ::hyencode::EncodeResult<()> {
                ::hyencode::Encoder::encode_object(encoder, self)
            }
        }
    })
}

#[proc_macro_derive(Encode, attributes(encode))]
pub fn derive_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
